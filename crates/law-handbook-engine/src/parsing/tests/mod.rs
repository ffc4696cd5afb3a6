//! Behaviour tests for the document parser.
//!
//! Fixture documents live in `fixtures/` next to this module.

use pretty_assertions::assert_eq;

use crate::models::{MetadataEntry, ParsedDocument};
use crate::parsing::{ParseError, parse_document};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

fn clauses_of(doc: &ParsedDocument, section: usize) -> Vec<&str> {
    doc.sections()[section]
        .clauses()
        .iter()
        .map(String::as_str)
        .collect()
}

// Title

#[test]
fn title_is_text_after_first_space() {
    let doc = parse_document("TAG My Law Name").unwrap();
    assert_eq!(doc.name(), "My Law Name");
    assert!(doc.metadata().is_empty());
    assert!(doc.sections().is_empty());
}

#[test]
fn title_skips_leading_blank_lines() {
    let doc = parse_document("\n\n   \n# 宪法\n").unwrap();
    assert_eq!(doc.name(), "宪法");
}

#[test]
fn single_word_title_is_malformed() {
    let result = parse_document("消费者权益保护法\n公布日期 2013");
    assert_eq!(
        result,
        Err(ParseError::MalformedTitle {
            line: 1,
            text: "消费者权益保护法".to_string(),
        })
    );
}

#[test]
fn empty_document_is_an_error() {
    assert_eq!(parse_document(""), Err(ParseError::EmptyDocument));
    assert_eq!(parse_document("  \n\n "), Err(ParseError::EmptyDocument));
}

// Preamble

#[test]
fn preamble_lines_become_metadata_in_order() {
    let text = "# Law\n公布机关 全国人民代表大会常务委员会\n公布日期 2013-10-25\n中华人民共和国主席令\n公布日期 duplicate\n<!-- INFO END -->";
    let doc = parse_document(text).unwrap();

    assert_eq!(
        doc.metadata(),
        &[
            MetadataEntry::new("公布机关", "全国人民代表大会常务委员会"),
            MetadataEntry::new("公布日期", "2013-10-25"),
            MetadataEntry::new("中华人民共和国主席令", ""),
            MetadataEntry::new("公布日期", "duplicate"),
        ]
    );
    assert!(doc.metadata()[2].is_standalone());
}

#[test]
fn metadata_content_keeps_later_spaces() {
    let doc = parse_document("# Law\nEnacted 1 January 2020\n<!-- INFO END -->").unwrap();
    assert_eq!(doc.metadata()[0].content, "1 January 2020");
}

#[test]
fn sentinel_is_not_recorded() {
    let doc = parse_document("# Law\n<!-- INFO END -->\n# Chapter\n第一条 a").unwrap();
    assert!(doc.metadata().is_empty());
    assert_eq!(doc.sections().len(), 1);
}

#[test]
fn document_without_sentinel_is_all_preamble() {
    // Headings and clauses are just metadata until the sentinel is seen
    let doc = parse_document("# Law\n# 第一章\n第一条 内容").unwrap();
    assert!(doc.sections().is_empty());
    assert_eq!(
        doc.metadata(),
        &[
            MetadataEntry::new("#", "第一章"),
            MetadataEntry::new("第一条", "内容"),
        ]
    );
}

// Body

#[test]
fn heading_followed_by_clause() {
    let doc = parse_document("# Law\n<!-- INFO END -->\n# Chapter 1\n第一条 Something").unwrap();

    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].title(), "Chapter 1");
    assert_eq!(clauses_of(&doc, 0), vec!["第一条 Something"]);
}

#[test]
fn consecutive_clause_openers_are_separate_clauses() {
    let doc =
        parse_document("# Law\n<!-- INFO END -->\n# 总则\n第一条 first\n第二条 second").unwrap();
    assert_eq!(clauses_of(&doc, 0), vec!["第一条 first", "第二条 second"]);
}

#[test]
fn continuation_line_merges_into_previous_clause() {
    let text = "# Law\n<!-- INFO END -->\n# 总则\n第一条 经营者应当：\n（一）明码标价；\n（二）出具发票。\n第二条 next";
    let doc = parse_document(text).unwrap();

    assert_eq!(
        clauses_of(&doc, 0),
        vec![
            "第一条 经营者应当：\n    （一）明码标价；\n    （二）出具发票。",
            "第二条 next",
        ]
    );
}

#[test]
fn first_line_of_section_is_always_a_clause() {
    // No clause-opener pattern, but the section is empty
    let doc = parse_document("# Law\n<!-- INFO END -->\n# 序言\n中国是世界上历史最悠久的国家之一。\n中国各族人民共同创造了光辉灿烂的文化。").unwrap();

    assert_eq!(
        clauses_of(&doc, 0),
        vec!["中国是世界上历史最悠久的国家之一。\n    中国各族人民共同创造了光辉灿烂的文化。"]
    );
}

#[test]
fn new_heading_resets_current_clause() {
    let text = "# Law\n<!-- INFO END -->\n# A\n第一条 a\n# B\ncontinued text\nmore text";
    let doc = parse_document(text).unwrap();

    assert_eq!(clauses_of(&doc, 0), vec!["第一条 a"]);
    assert_eq!(clauses_of(&doc, 1), vec!["continued text\n    more text"]);
}

#[test]
fn empty_sections_are_kept() {
    let doc = parse_document("# Law\n<!-- INFO END -->\n# 第一编\n# 第一章\n第一条 x").unwrap();
    let titles: Vec<_> = doc.sections().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["第一编", "第一章"]);
    assert!(doc.sections()[0].clauses().is_empty());
}

#[test]
fn any_number_of_hashes_opens_a_section() {
    let doc = parse_document("# Law\n<!-- INFO END -->\n## 第一节 一般规定\n第一条 x").unwrap();
    assert_eq!(doc.sections()[0].title(), "第一节 一般规定");
}

#[test]
fn clause_lines_without_spaces_are_accepted() {
    let doc = parse_document("# Law\n<!-- INFO END -->\n# 总则\n第一条\n本法适用于全国。").unwrap();
    assert_eq!(clauses_of(&doc, 0), vec!["第一条\n    本法适用于全国。"]);
}

#[test]
fn repeated_sentinel_in_body_is_ignored() {
    let doc =
        parse_document("# Law\n<!-- INFO END -->\n# 总则\n第一条 a\n<!-- INFO END -->\ntail").unwrap();
    assert_eq!(clauses_of(&doc, 0), vec!["第一条 a\n    tail"]);
}

#[test]
fn heading_without_text_is_malformed() {
    let result = parse_document("# Law\n<!-- INFO END -->\n# 总则\n第一条 a\n##");
    assert_eq!(
        result,
        Err(ParseError::MalformedBodyLine {
            line: 5,
            text: "##".to_string(),
        })
    );
}

#[test]
fn clause_before_heading_is_orphan() {
    let result = parse_document("# Law\n<!-- INFO END -->\n第一条 a\n# 总则");
    let err = result.unwrap_err();
    assert_eq!(
        err,
        ParseError::OrphanClause {
            line: 3,
            text: "第一条 a".to_string(),
        }
    );
    assert_eq!(err.line(), Some(3));
}

#[test]
fn lines_are_trimmed_before_classification() {
    let doc = parse_document("  # Law  \n   <!-- INFO END -->   \n  # 总则\n   第一条 a   \n").unwrap();
    assert_eq!(doc.name(), "Law");
    assert_eq!(doc.sections()[0].title(), "总则");
    assert_eq!(clauses_of(&doc, 0), vec!["第一条 a"]);
}

// Fixtures

#[test]
fn fixture_consumer_protection() {
    let doc = parse_document(&fixture("consumer_protection")).unwrap();

    assert_eq!(doc.name(), "中华人民共和国消费者权益保护法");
    assert_eq!(doc.metadata().len(), 4);
    assert_eq!(doc.metadata()[0], MetadataEntry::new("中华人民共和国主席令", ""));
    assert_eq!(
        doc.metadata()[1],
        MetadataEntry::new("发布机关", "全国人民代表大会常务委员会")
    );

    let titles: Vec<_> = doc.sections().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["第一章 总则", "第二章 消费者的权利"]);

    assert_eq!(clauses_of(&doc, 0).len(), 3);
    assert_eq!(
        clauses_of(&doc, 1),
        vec![
            "第七条 消费者在购买、使用商品和接受服务时享有人身、财产安全不受损害的权利。",
            "第八条 消费者享有知悉其购买、使用的商品或者接受的服务的真实情况的权利。\n    消费者有权根据商品或者服务的不同情况，要求经营者提供商品的价格、产地、生产者、用途、性能、规格、等级、主要成份。",
        ]
    );
    assert_eq!(doc.clause_count(), 5);
}

#[test]
fn parsing_is_idempotent() {
    let text = fixture("consumer_protection");
    assert_eq!(parse_document(&text), parse_document(&text));
}
