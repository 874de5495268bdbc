//! docstruct CLI - document structure extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docstruct::render::{to_json, to_outline};
use docstruct::{
    detect_format_from_path, Document, DocumentParser, InputFormat, JsonFormat, ParseOptions,
    PdfInfo, RawInput,
};

#[derive(Parser)]
#[command(name = "docstruct")]
#[command(version)]
#[command(about = "Extract headings, paragraphs, lists and metadata from documents", long_about = None)]
struct Cli {
    #[command(flatten)]
    tuning: Tuning,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Heuristic overrides shared by every command.
#[derive(Args, Debug, Default)]
struct Tuning {
    /// JSON file with parse options
    #[arg(long, value_name = "FILE", env = "DOCSTRUCT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Lines must be longer than this to count as paragraphs
    #[arg(long, env = "DOCSTRUCT_MIN_PARAGRAPH_LEN", global = true)]
    min_paragraph_len: Option<usize>,

    /// Japanese-script share above which language is "ja"
    #[arg(long, env = "DOCSTRUCT_JA_THRESHOLD", global = true)]
    ja_threshold: Option<f64>,

    /// Maximum title length before truncation
    #[arg(long, env = "DOCSTRUCT_TITLE_MAX_CHARS", global = true)]
    title_max_chars: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document to JSON
    Parse {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format (word-markup, pdf-text, plain-text); detected from the extension if omitted
        #[arg(short, long, value_name = "TAG")]
        format: Option<String>,

        /// PDF info dictionary as JSON (Title, Author, CreationDate, ModDate, numpages)
        #[arg(long, value_name = "FILE")]
        info: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document summary
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format
        #[arg(short, long, value_name = "TAG")]
        format: Option<String>,
    },

    /// Print headings and lists in document order
    Outline {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format
        #[arg(short, long, value_name = "TAG")]
        format: Option<String>,

        /// Include YAML frontmatter
        #[arg(long)]
        frontmatter: bool,
    },

    /// Parse many files, writing one JSON file each
    Batch {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "docstruct_output")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = load_options(&cli.tuning).and_then(|options| {
        let parser = DocumentParser::with_options(options);
        match cli.command {
            Commands::Parse {
                input,
                format,
                info,
                output,
                compact,
            } => cmd_parse(
                &parser,
                &input,
                format.as_deref(),
                info.as_deref(),
                output.as_deref(),
                compact,
            ),
            Commands::Info { input, format } => cmd_info(&parser, &input, format.as_deref()),
            Commands::Outline {
                input,
                format,
                frontmatter,
            } => cmd_outline(&parser, &input, format.as_deref(), frontmatter),
            Commands::Batch { inputs, output } => cmd_batch(&parser, &inputs, &output),
            Commands::Version => {
                cmd_version();
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Build options from the config file, then apply flag and env overrides.
fn load_options(tuning: &Tuning) -> CliResult<ParseOptions> {
    let mut options = match tuning.config {
        Some(ref path) => {
            let raw = fs::read_to_string(path)?;
            serde_json::from_str::<ParseOptions>(&raw)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
        }
        None => ParseOptions::default(),
    };

    if let Some(len) = tuning.min_paragraph_len {
        options = options.with_min_paragraph_len(len);
    }
    if let Some(threshold) = tuning.ja_threshold {
        options = options.with_japanese_ratio_threshold(threshold);
    }
    if let Some(max) = tuning.title_max_chars {
        options = options.with_title_max_chars(max);
    }

    log::debug!("Parse options: {:?}", options);
    Ok(options)
}

fn resolve_format(input: &Path, format: Option<&str>) -> CliResult<InputFormat> {
    Ok(match format {
        Some(tag) => tag.parse()?,
        None => detect_format_from_path(input)?,
    })
}

fn read_input(input: &Path, format: Option<&str>) -> CliResult<RawInput> {
    let format = resolve_format(input, format)?;
    let bytes = fs::read(input)?;
    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(RawInput::new(bytes, filename, format))
}

fn cmd_parse(
    parser: &DocumentParser,
    input: &Path,
    format: Option<&str>,
    info: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> CliResult<()> {
    let mut raw = read_input(input, format)?;
    if let Some(path) = info {
        let info: PdfInfo = serde_json::from_str(&fs::read_to_string(path)?)?;
        raw = raw.with_pdf_info(info);
    }

    let doc = parser.parse_input(raw)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(parser: &DocumentParser, input: &Path, format: Option<&str>) -> CliResult<()> {
    let doc = parser.parse_input(read_input(input, format)?)?;
    print_info(input, &doc);
    Ok(())
}

fn print_info(input: &Path, doc: &Document) {
    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), doc.file_type);
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref created) = doc.metadata.created_date {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified_date {
        println!("{}: {}", "Modified".bold(), modified);
    }
    if let Some(pages) = doc.metadata.page_count {
        println!("{}: {}", "Pages".bold(), pages);
    }
    if let Some(ref language) = doc.metadata.language {
        println!("{}: {}", "Language".bold(), language);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), doc.word_count);
    println!("{}: {}", "Characters".bold(), doc.text.chars().count());
    println!("{}: {}", "Headings".bold(), doc.structure.headings.len());
    println!("{}: {}", "Paragraphs".bold(), doc.structure.paragraphs.len());
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        doc.structure.lists.len(),
        doc.structure.list_item_count()
    );
}

fn cmd_outline(
    parser: &DocumentParser,
    input: &Path,
    format: Option<&str>,
    frontmatter: bool,
) -> CliResult<()> {
    let doc = parser.parse_input(read_input(input, format)?)?;
    println!("{}", to_outline(&doc, frontmatter));
    Ok(())
}

fn cmd_batch(parser: &DocumentParser, inputs: &[PathBuf], output_dir: &Path) -> CliResult<()> {
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    // Files that cannot be read are reported without stopping the batch
    pb.set_message("Reading files...");
    let mut raws = Vec::new();
    let mut sources = Vec::new();
    let mut failed = 0usize;
    for input in inputs {
        match read_input(input, None) {
            Ok(raw) => {
                raws.push(raw);
                sources.push(input.clone());
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Skipped".yellow(), input.display(), e));
                failed += 1;
                pb.inc(1);
            }
        }
        pb.inc(1);
    }

    pb.set_message("Parsing...");
    let results = parser.parse_many(raws);

    pb.set_message("Writing JSON...");
    let mut written = 0usize;
    for (input, result) in sources.iter().zip(results) {
        match result.and_then(|doc| to_json(&doc, JsonFormat::Pretty)) {
            Ok(json) => {
                let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                fs::write(output_dir.join(format!("{}.json", stem)), json)?;
                written += 1;
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} written, {} failed -> {}",
        "Done!".green().bold(),
        written,
        failed,
        output_dir.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docstruct".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document structure extraction tool");
    println!();
    println!("Formats: {}", "word-markup, pdf-text, plain-text".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_defaults() {
        let options = load_options(&Tuning::default()).unwrap();
        assert_eq!(options, ParseOptions::default());
    }

    #[test]
    fn test_load_options_config_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{"min_paragraph_len": 30, "title_max_chars": 50}"#).unwrap();

        let tuning = Tuning {
            config: Some(path),
            min_paragraph_len: Some(5),
            ..Default::default()
        };
        let options = load_options(&tuning).unwrap();
        assert_eq!(options.min_paragraph_len, 5);
        assert_eq!(options.title_max_chars, 50);
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(Path::new("a.pdf"), None).unwrap(),
            InputFormat::PdfText
        );
        assert_eq!(
            resolve_format(Path::new("a.pdf"), Some("plain-text")).unwrap(),
            InputFormat::PlainText
        );
        assert!(resolve_format(Path::new("a.bin"), None).is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
