use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hanbridge::{decode_text, parse_extension_filter, Config, Engine};
use similar::{ChangeTag, TextDiff};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hanbridge")]
#[command(about = "Batch simplified-to-traditional Chinese conversion for project trees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert simplified Chinese across a project tree
    Convert {
        /// Project root (defaults to the current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Preview - report what would change without modifying files
        #[arg(short = 'n', long)]
        preview: bool,

        /// Custom mapping file (one simplified:traditional pair per line)
        #[arg(short, long)]
        custom: Option<PathBuf>,

        /// Comma-separated extension filter (e.g. .py,.js,.md)
        #[arg(short, long)]
        extensions: Option<String>,

        /// Engine config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show unified diffs of affected files
        #[arg(short, long)]
        diff: bool,
    },

    /// Search the dictionary for a term
    Search {
        term: String,

        /// Custom mapping file to load first
        #[arg(short, long)]
        custom: Option<PathBuf>,
    },

    /// Show conversion statistics for a single file
    Inspect {
        file: PathBuf,

        /// Custom mapping file to load first
        #[arg(short, long)]
        custom: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            path,
            preview,
            custom,
            extensions,
            config,
            output,
            diff,
        } => cmd_convert(path, preview, custom, extensions, config, output, diff),

        Commands::Search { term, custom } => cmd_search(&term, custom),

        Commands::Inspect { file, custom } => cmd_inspect(&file, custom),
    }
}

fn build_engine(config: Option<PathBuf>, custom: Option<PathBuf>) -> Result<Engine> {
    let config = match config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    let mut engine = Engine::new(config);
    if let Some(path) = custom {
        let count = engine.load_custom_mappings(&path)?;
        println!(
            "{}",
            format!("Loaded {} custom mappings from {}", count, path.display()).dimmed()
        );
    }
    Ok(engine)
}

fn cmd_convert(
    path: PathBuf,
    preview: bool,
    custom: Option<PathBuf>,
    extensions: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    diff: bool,
) -> Result<()> {
    let mut engine = build_engine(config, custom)?;
    let filter: Option<HashSet<String>> = extensions.as_deref().map(parse_extension_filter);

    if preview {
        println!("{}", "[PREVIEW - no files will be modified]".cyan());
    }

    if diff {
        // Diffs come from an in-memory conversion pass so they can be shown
        // before anything is written.
        let probe = engine.convert_project(&path, true, filter.as_ref())?;
        for detail in &probe.file_details {
            if let Ok(bytes) = fs::read(&detail.path) {
                let original = decode_text(&bytes).text;
                let (converted, _) = engine.convert_text(&original);
                display_diff(&detail.path, &original, &converted);
            }
        }
        println!();
    }

    let summary = engine.convert_project(&path, preview, filter.as_ref())?;
    let report = engine.generate_report(&summary, preview);
    println!("{report}");

    if let Some(output) = output {
        fs::write(&output, &report)?;
        println!("{}", format!("Report written to {}", output.display()).dimmed());
    }

    if !summary.errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_search(term: &str, custom: Option<PathBuf>) -> Result<()> {
    let engine = build_engine(None, custom)?;
    let hits = engine.store().search(term);
    if hits.is_empty() {
        println!("No mappings match {term:?}");
        return Ok(());
    }
    println!("{} mappings match {term:?}:", hits.len());
    for (simplified, traditional) in hits {
        println!("  {} {} {}", simplified, "->".dimmed(), traditional);
    }
    Ok(())
}

fn cmd_inspect(file: &Path, custom: Option<PathBuf>) -> Result<()> {
    let mut engine = build_engine(None, custom)?;
    let bytes = fs::read(file)?;
    let decoded = decode_text(&bytes);

    let stats = engine.text_statistics(&decoded.text);
    println!("{}", file.display());
    println!("  encoding: {}", decoded.encoding);
    println!("  characters: {}", stats.total_chars);
    println!("  chinese characters: {}", stats.chinese_chars);
    println!("  convertible characters: {}", stats.convertible_chars);
    println!("  matching mappings: {}", stats.mapping_hits);

    let runs = hanbridge::chinese_runs(&decoded.text);
    if !runs.is_empty() {
        println!("  chinese runs ({} shown):", runs.len().min(10));
        for (_, _, run) in runs.iter().take(10) {
            println!("    {run}");
        }
    }
    Ok(())
}

/// Unified diff between original and converted content.
fn display_diff(file: &Path, original: &str, converted: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (converted)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, converted);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", format!("-{change}").red()),
            ChangeTag::Insert => print!("{}", format!("+{change}").green()),
            ChangeTag::Equal => print!(" {change}"),
        }
    }
}
