//! docsift CLI - PDF outline extraction and section ranking

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsift::{
    collect_sections, extract_outline, parse_file_with_options, process_directory, process_tasks,
    to_json, DocumentParser, HashEmbedder, HeadingLevel, JsonFormat, ParseOptions,
};

#[derive(Parser)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "Extract PDF outlines and rank sections against a persona", long_about = None)]
struct Cli {
    /// Input PDF file or directory
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract document outlines to JSON
    Outline {
        /// Input PDF file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory (stdout for single files if not given)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Rank document sections against a persona description
    Rank {
        /// Task directory holding persona.txt and PDFs, or task subdirectories
        #[arg(value_name = "DIR")]
        root: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
        }) => cmd_outline(&input, output.as_deref(), compact),
        Some(Commands::Rank { root, compact }) => cmd_rank(&root, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract an outline if input is provided
            if let Some(input) = cli.input {
                cmd_outline(&input, cli.output.as_deref(), cli.compact)
            } else {
                println!("{}", "Usage: docsift <INPUT> [OUTPUT]".yellow());
                println!("       docsift --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if input.is_dir() {
        let output_dir = output
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| input.join("output"));

        let pb = spinner("Extracting outlines...");
        let summary = process_directory(input, &output_dir, format)?;
        pb.finish_and_clear();

        println!(
            "{} {} documents processed",
            "Done!".green().bold(),
            summary.processed
        );
        if summary.failed > 0 {
            println!(
                "{} {} documents skipped",
                "Warning:".yellow().bold(),
                summary.failed
            );
        }
        println!("Output directory: {}", output_dir.display());

        return Ok(());
    }

    // Use lenient mode to continue even if some text extraction fails
    let options = ParseOptions::new().lenient();
    let doc = parse_file_with_options(input, options)?;
    let outline = extract_outline(&doc);
    let json = to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_rank(root: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let embedder = HashEmbedder::new();

    let pb = spinner("Ranking sections...");
    let completed = process_tasks(root, &embedder, format)?;
    pb.finish_and_clear();

    if completed == 0 {
        println!("{}", "No tasks completed".yellow());
        println!("Each task directory needs a persona.txt and at least one PDF");
    } else {
        println!(
            "{} {} tasks completed",
            "Done!".green().bold(),
            completed
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient mode so metadata still shows when text extraction fails
    let options = ParseOptions::new().lenient();
    let parser = DocumentParser::open_with_options(input, options)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), parser.version());
    println!("{}: {}", "Pages".bold(), parser.page_count());
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if parser.is_encrypted() { "Yes" } else { "No" }
    );

    let doc = match parser.parse() {
        Ok(doc) => doc,
        Err(e) => {
            println!();
            println!("{} {}", "Warning:".yellow().bold(), e);
            return Ok(());
        }
    };

    if let Some(ref title) = doc.metadata_title {
        println!("{}: {}", "Metadata title".bold(), title);
    }

    println!();
    println!("{}", "Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let outline = extract_outline(&doc);
    println!("{}: {}", "Title".bold(), outline.title);
    println!("{}: {}", "Headings".bold(), outline.outline.len());
    for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
        let count = outline.outline.iter().filter(|h| h.level == level).count();
        if count > 0 {
            println!("  {}: {}", level, count);
        }
    }

    let sections = collect_sections(&doc);
    println!("{}: {}", "Section candidates".bold(), sections.len());

    let mut languages: Vec<&str> = outline
        .outline
        .iter()
        .map(|h| h.language.as_str())
        .collect();
    languages.sort();
    languages.dedup();
    if !languages.is_empty() {
        println!("{}: {}", "Languages".bold(), languages.join(", "));
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF outline extraction and section ranking");
    println!();
    println!("License: MIT");
}
