use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use law_handbook_config::Config;
use law_handbook_engine::{LawRef, ParsedDocument, SectionMatch, io, parse_document};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "law-handbook", version, about = "Read and search statute handbooks")]
struct Cli {
    /// Library directory containing the 法律法条 tree.
    /// If not provided, the config file is used.
    #[arg(long, global = true, value_name = "DIRECTORY", env = "LAW_HANDBOOK_LIBRARY")]
    library: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save DIRECTORY as the library in the config file
    Init {
        /// Library directory containing the 法律法条 tree
        directory: PathBuf,
    },
    /// List every law in the library
    List,
    /// Print a law's sections and clauses
    Show {
        #[command(flatten)]
        law: LawArgs,

        /// Only print clauses containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a law's preamble metadata
    Info {
        #[command(flatten)]
        law: LawArgs,
    },
    /// Parse a file (or stdin) directly and print it as JSON
    Parse {
        /// Path to a law file. Reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct LawArgs {
    /// Name of the law
    name: String,

    /// Sub-directory of the law file
    #[arg(long)]
    folder: Option<String>,

    /// File name to use instead of the law name
    #[arg(long)]
    file: Option<String>,
}

impl LawArgs {
    fn law_ref(&self) -> LawRef {
        LawRef {
            name: self.name.clone(),
            folder: self.folder.clone(),
            file: self.file.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { directory } => {
            let library = std::path::absolute(&directory)
                .with_context(|| format!("Failed to resolve {}", directory.display()))?;
            io::validate_library_dir(&library)
                .with_context(|| format!("Library path '{}' is invalid", library.display()))?;
            let laws = io::scan_laws(&library)?;
            let config_path = Config::new(library.clone()).save()?;
            log::info!("Saved config to {}", config_path.display());
            println!(
                "Library '{}' with {} laws saved to {}",
                library.display(),
                laws.len(),
                config_path.display()
            );
        }
        Commands::List => {
            let library = resolve_library(cli.library)?;
            for law in io::scan_laws(&library)? {
                match &law.folder {
                    Some(folder) => println!("{folder}/{}", law.name),
                    None => println!("{}", law.name),
                }
            }
        }
        Commands::Show { law, search, json } => {
            let library = resolve_library(cli.library)?;
            let doc = io::load_law(&law.law_ref(), &library)?;
            let query = search.as_deref().unwrap_or_default();
            if json {
                println!("{}", render_json(&doc, query)?);
            } else {
                for line in render_document(&doc, query) {
                    println!("{line}");
                }
            }
        }
        Commands::Info { law } => {
            let library = resolve_library(cli.library)?;
            let doc = io::load_law(&law.law_ref(), &library)?;
            for line in render_info(&doc) {
                println!("{line}");
            }
        }
        Commands::Parse { file } => {
            let content = read_input(file.as_deref())?;
            let doc = parse_document(&content)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

/// Library path from the command line, falling back to the config file
fn resolve_library(from_cli: Option<PathBuf>) -> Result<PathBuf> {
    let (library, source) = match from_cli {
        Some(path) => {
            log::debug!("Using library path from command line: {}", path.display());
            (path, String::new())
        }
        None => {
            let config_path = Config::config_path();
            match Config::load().context("Failed to load config file")? {
                Some(config) => {
                    log::debug!("Loaded library path from {}", config_path.display());
                    (
                        config.library_path,
                        format!(" from config file '{}'", config_path.display()),
                    )
                }
                None => bail!(
                    "No library path provided and no config file found\n\
                     Pass --library <DIRECTORY> or create a config file at {}",
                    config_path.display()
                ),
            }
        }
    };

    io::validate_library_dir(&library).with_context(|| {
        format!(
            "Library path '{}'{source} is invalid",
            library.display()
        )
    })?;
    Ok(library)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn render_document(doc: &ParsedDocument, query: &str) -> Vec<String> {
    let mut lines = vec![doc.name().to_string(), String::new()];

    for section in doc.filter(query) {
        lines.push(format!("## {}", section.title));
        lines.push(String::new());
        for clause in section.clauses {
            lines.push(clause.to_string());
            lines.push(String::new());
        }
    }

    lines
}

fn render_info(doc: &ParsedDocument) -> Vec<String> {
    doc.metadata()
        .iter()
        .map(|entry| {
            if entry.is_standalone() {
                entry.header.clone()
            } else {
                format!("{}: {}", entry.header, entry.content)
            }
        })
        .collect()
}

/// Same shape with or without a query; an empty query keeps every non-empty section.
fn render_json(doc: &ParsedDocument, query: &str) -> Result<String> {
    let sections: Vec<SectionMatch> = doc.filter(query);
    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "name": doc.name(),
        "metadata": doc.metadata(),
        "query": query,
        "sections": sections,
    }))?)
}
