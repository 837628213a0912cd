//! papersect CLI - title and section extraction from span dumps

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use papersect::render::{self, JsonFormat, RenderOptions};
use papersect::{
    chapter_names, extract_batch, extract_with_options, ArxivId, CleanupPreset, Document,
    ExtractOptions, FontStatistics, HeadingMismatch, SourceRegistry,
};

#[derive(Parser)]
#[command(name = "papersect")]
#[command(version)]
#[command(about = "Recover titles and sections of papers from font-size signals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract title and sections as JSON
    Extract {
        /// Input span dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// Render sections as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input span dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum, env = "PAPERSECT_CLEANUP")]
        cleanup: Option<CleanupLevel>,

        /// Heading level for sections (1-6)
        #[arg(long, default_value = "2")]
        section_level: u8,

        /// Skip sections without body text
        #[arg(long)]
        skip_empty: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// Render the name:body: digest used for summarization
    Digest {
        /// Input span dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum, env = "PAPERSECT_CLEANUP")]
        cleanup: Option<CleanupLevel>,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// List section names in order
    Sections {
        /// Input span dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// List numbered chapter lines
    Chapters {
        /// Input span dump
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show font statistics and document counts
    Info {
        /// Input span dump
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Extract many span dumps in parallel, one JSON file each
    Batch {
        /// Input span dumps
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// Resolve an arXiv link to its identifier and download URLs
    Arxiv {
        /// Abstract or PDF link
        #[arg(value_name = "LINK")]
        link: String,
    },

    /// Show version information
    Version,
}

/// Extraction flags shared by the extracting subcommands.
#[derive(Args)]
struct ExtractArgs {
    /// Handling of font-size headings that do not match the first one
    #[arg(long, value_enum, default_value = "drop", env = "PAPERSECT_MISMATCH")]
    mismatch: MismatchPolicy,

    /// Trim the body of the last section as well
    #[arg(long)]
    uniform_trim: bool,

    /// Use this title instead of detecting one
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,
}

impl ExtractArgs {
    fn options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new().with_heading_mismatch(self.mismatch.into());
        if self.uniform_trim {
            options = options.uniform_trim();
        }
        if let Some(title) = &self.title {
            options = options.with_known_title(title.clone());
        }
        options
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MismatchPolicy {
    /// Discard the span (compatible behavior)
    Drop,
    /// Append the span to the current section
    Body,
}

impl From<MismatchPolicy> for HeadingMismatch {
    fn from(policy: MismatchPolicy) -> Self {
        match policy {
            MismatchPolicy::Drop => HeadingMismatch::Drop,
            MismatchPolicy::Body => HeadingMismatch::AsBody,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization and whitespace)
    Minimal,
    /// Standard cleanup (ligatures and hyphenation as well)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            compact,
            extract,
        } => cmd_extract(&input, output.as_deref(), compact, &extract),
        Commands::Markdown {
            input,
            output,
            cleanup,
            section_level,
            skip_empty,
            extract,
        } => cmd_markdown(
            &input,
            output.as_deref(),
            cleanup,
            section_level,
            skip_empty,
            &extract,
        ),
        Commands::Digest {
            input,
            output,
            cleanup,
            extract,
        } => cmd_digest(&input, output.as_deref(), cleanup, &extract),
        Commands::Sections { input, extract } => cmd_sections(&input, &extract),
        Commands::Chapters { input } => cmd_chapters(&input),
        Commands::Info { input } => cmd_info(&input),
        Commands::Batch {
            inputs,
            output,
            extract,
        } => cmd_batch(&inputs, output.as_deref(), &extract),
        Commands::Arxiv { link } => cmd_arxiv(&link),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(input: &Path) -> papersect::Result<Document> {
    SourceRegistry::with_defaults().load(input)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn render_options(cleanup: Option<CleanupLevel>) -> RenderOptions {
    let mut options = RenderOptions::new();
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }
    options
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    args: &ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input)?;
    let extraction = extract_with_options(&doc, &args.options())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&extraction, format)?;
    write_output(output, &json)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
    section_level: u8,
    skip_empty: bool,
    args: &ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input)?;
    let extraction = extract_with_options(&doc, &args.options())?;

    let options = render_options(cleanup)
        .with_section_level(section_level)
        .with_empty_sections(!skip_empty);

    let markdown = render::to_markdown(&extraction, &options)?;
    write_output(output, &markdown)
}

fn cmd_digest(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
    args: &ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input)?;
    let extraction = extract_with_options(&doc, &args.options())?;

    let digest = render::to_digest(&extraction, &render_options(cleanup))?;
    write_output(output, digest.trim_end())
}

fn cmd_sections(input: &Path, args: &ExtractArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input)?;
    let extraction = extract_with_options(&doc, &args.options())?;

    if extraction.title.is_empty() {
        println!("{}", "(no title)".dimmed());
    } else {
        println!("{}", extraction.title.cyan().bold());
    }

    if extraction.sections.is_empty() {
        println!("{}", "No sections found".yellow());
        return Ok(());
    }

    let last = extraction.sections.len() - 1;
    for (i, section) in extraction.sections.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.dimmed(),
            section.name,
            format!("({} chars)", section.body.trim().chars().count()).dimmed()
        );
    }

    Ok(())
}

fn cmd_chapters(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input)?;
    let chapters = chapter_names(&doc);

    if chapters.is_empty() {
        println!("{}", "No numbered chapters found".yellow());
    }
    for chapter in chapters {
        println!("{}", chapter);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let blocks: usize = doc.pages.iter().map(|p| p.block_count()).sum();
    let text = doc.plain_text();

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Blocks".bold(), blocks);
    println!("{}: {}", "Spans".bold(), doc.span_count());
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    println!();
    println!("{}", "Font Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = FontStatistics::collect(&doc)?;
    let [second, first] = stats.max_sizes();
    println!("{}: {}", "Body size".bold(), stats.mode_size());
    println!("{}: {}, {}", "Largest sizes".bold(), first, second);
    println!("{}: {}", "Distinct sizes".bold(), stats.distinct_sizes());

    let mut histogram = stats.size_histogram.clone();
    histogram.sort_by(|a, b| b.1.cmp(&a.1));
    for (size, count) in histogram.iter().take(8) {
        println!("  {:>6.1}pt {}", size, format!("{} spans", count).dimmed());
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    args: &ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let file_names = output_file_names(inputs);

    pb.set_message("Loading...");
    let mut loaded = Vec::with_capacity(inputs.len());
    let mut docs = Vec::with_capacity(inputs.len());
    let mut failures = Vec::new();
    for (input, file_name) in inputs.iter().zip(&file_names) {
        match load(input) {
            Ok(doc) => {
                loaded.push((input, file_name));
                docs.push(doc);
            }
            Err(e) => failures.push((input, e.to_string())),
        }
        pb.inc(1);
    }

    pb.set_message("Extracting...");
    let results = extract_batch(&docs, &args.options());

    let mut written = 0;
    for ((input, file_name), result) in loaded.into_iter().zip(results) {
        let path = output_dir.join(file_name);
        match result.and_then(|e| render::to_json(&e, JsonFormat::Pretty)) {
            Ok(json) => {
                log::debug!("Writing {} to {}", input.display(), path.display());
                fs::write(&path, json)?;
                written += 1;
            }
            Err(e) => failures.push((input, e.to_string())),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} files extracted",
        "Done!".green().bold(),
        written,
        inputs.len()
    );
    for (input, error) in &failures {
        log::warn!("Extraction failed for {}: {}", input.display(), error);
        println!("  {} {}: {}", "✗".red(), input.display(), error);
    }

    if !failures.is_empty() {
        return Err(format!("{} of {} inputs failed", failures.len(), inputs.len()).into());
    }
    Ok(())
}

/// One output file name per input, in input order.
///
/// Inputs sharing a file stem get `-2`, `-3`, ... suffixes so no output
/// overwrites another.
fn output_file_names(inputs: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let mut name = format!("{}.sections.json", stem);
            let mut n = 2;
            while !used.insert(name.clone()) {
                name = format!("{}-{}.sections.json", stem, n);
                n += 1;
            }
            name
        })
        .collect()
}

fn cmd_arxiv(link: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ArxivId::parse(link)?;
    println!("{}: {}", "ID".bold(), id);
    println!("{}: {}", "Abstract".bold(), id.abs_url());
    println!("{}: {}", "PDF".bold(), id.pdf_url());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "papersect".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Title and section extraction from font-size signals");
    println!();
    println!("License: MIT");
}
