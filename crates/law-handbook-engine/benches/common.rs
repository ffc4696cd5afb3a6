// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_law_content(chapters: usize, articles_per_chapter: usize) -> String {
    let mut content = String::from("# 中华人民共和国测试法\n\n中华人民共和国主席令\n公布日期 2022-02-26\n\n<!-- INFO END -->\n\n");
    let mut article = 1;

    for chapter in 1..=chapters {
        content.push_str(&format!("## 第{chapter}章 规定\n\n"));
        for _ in 0..articles_per_chapter {
            content.push_str(&format!(
                "第{article}条 经营者与消费者进行交易，应当遵循自愿、平等、公平、诚实信用的原则。\n\n"
            ));
            content.push_str("（一）经营者应当明码标价；\n（二）经营者应当出具发票。\n\n");
            article += 1;
        }
    }

    content
}
