use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use scour::config::{self, FilterConfig};
use scour::filter::{load_side, ToxicityFilter};
use scour::toxicity::list::ToxicityList;
use scour::{output, pipeline};

/// Scour: toxic-phrase filtering for parallel translation corpora.
///
/// Matches tokenized substrings against curated per-language toxic word
/// lists — one filtering stage of a bitext cleaning pipeline.
#[derive(Parser)]
#[command(name = "scour", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a bitext TSV stream, keeping lines under the toxicity limits
    Filter {
        /// Source language code (e.g. fr)
        #[arg(long)]
        src_lang: String,

        /// Target language code; omit for monolingual input
        #[arg(long)]
        tgt_lang: Option<String>,

        /// Phrase-list path template with a {lang} placeholder
        /// (default: SCOUR_TWL_TEMPLATE)
        #[arg(long)]
        template: Option<String>,

        /// Shared auxiliary phrase list unioned into every side's set
        /// (default: SCOUR_AUX_TWL)
        #[arg(long)]
        aux: Option<PathBuf>,

        /// Flag a side toxic when its count strictly exceeds this
        #[arg(long)]
        max_toxicity: Option<usize>,

        /// Reject a line when the src/tgt counts diverge by more than this
        #[arg(long)]
        max_toxicity_difference: Option<usize>,

        /// Input TSV file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file for kept lines (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Optional file for rejected lines
        #[arg(long)]
        rejected: Option<PathBuf>,

        /// Print the final counters as JSON to stderr
        #[arg(long)]
        stats_json: bool,
    },

    /// Score a single text against one language's phrase list
    Score {
        /// Language code whose list to load
        #[arg(long)]
        lang: String,

        /// Phrase-list path template with a {lang} placeholder
        #[arg(long)]
        template: Option<String>,

        /// Shared auxiliary phrase list
        #[arg(long)]
        aux: Option<PathBuf>,

        /// The text to score
        text: String,
    },

    /// Show which phrase lists resolve for the given language codes
    Lists {
        /// Phrase-list path template with a {lang} placeholder
        #[arg(long)]
        template: Option<String>,

        /// Shared auxiliary phrase list
        #[arg(long)]
        aux: Option<PathBuf>,

        /// Language codes to check
        langs: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr — stdout may carry the filtered data stream
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scour=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            src_lang,
            tgt_lang,
            template,
            aux,
            max_toxicity,
            max_toxicity_difference,
            input,
            output,
            rejected,
            stats_json,
        } => {
            let config = FilterConfig::new(
                template,
                aux,
                src_lang,
                tgt_lang,
                max_toxicity,
                max_toxicity_difference,
            )?;
            let filter = ToxicityFilter::new(&config)?;

            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
                    format!("Failed to open input file {}", path.display())
                })?)),
                None => Box::new(BufReader::new(io::stdin())),
            };

            let mut kept: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).with_context(
                    || format!("Failed to create output file {}", path.display()),
                )?)),
                None => Box::new(BufWriter::new(io::stdout())),
            };

            let mut rejected_out = match &rejected {
                Some(path) => Some(BufWriter::new(File::create(path).with_context(
                    || format!("Failed to create rejected file {}", path.display()),
                )?)),
                None => None,
            };

            let counts = pipeline::run(
                &filter,
                reader,
                &mut kept,
                rejected_out.as_mut().map(|w| w as &mut dyn Write),
            )?;

            kept.flush().context("Failed to flush output")?;
            if let Some(out) = rejected_out.as_mut() {
                out.flush().context("Failed to flush rejected output")?;
            }

            output::display_summary(&counts);
            if stats_json {
                eprintln!("{}", serde_json::to_string(&counts)?);
            }
        }

        Commands::Score {
            lang,
            template,
            aux,
            text,
        } => {
            let config = FilterConfig::new(template, aux, lang.clone(), None, None, None)?;
            match load_side(&config, Some(lang.as_str()))? {
                Some(list) => {
                    let count = list.toxicity_count(&text);
                    let matched = list.matched_phrases(&text);
                    output::display_score(&lang, &text, count, &matched);
                }
                None => {
                    println!("No phrase list resolves for '{lang}' — every text scores 0.");
                    println!("Check the template path or supply --aux.");
                }
            }
        }

        Commands::Lists {
            template,
            aux,
            langs,
        } => {
            let template = config::resolve_template(template)?;
            let aux = config::resolve_aux(aux);

            if langs.is_empty() {
                println!("No language codes given. Usage: scour lists fr en de");
                return Ok(());
            }

            println!("{}", "=== Phrase lists ===".bold());
            for lang in &langs {
                let path =
                    PathBuf::from(template.replace(config::LANG_PLACEHOLDER, lang));
                if path.is_file() {
                    let list = ToxicityList::load(&[&path])?;
                    println!(
                        "  {} {:<6} {} ({} stored variants)",
                        "+".green(),
                        lang,
                        path.display(),
                        list.len()
                    );
                } else {
                    println!(
                        "  {} {:<6} {} {}",
                        "-".yellow(),
                        lang,
                        path.display(),
                        "(missing — detection disabled)".dimmed()
                    );
                }
            }

            match &aux {
                Some(path) if path.is_file() => {
                    let list = ToxicityList::load(&[path])?;
                    println!(
                        "  {} aux    {} ({} stored variants)",
                        "+".green(),
                        path.display(),
                        list.len()
                    );
                }
                Some(path) => {
                    anyhow::bail!("Auxiliary phrase list not found: {}", path.display());
                }
                None => println!("  {} aux    {}", "-".dimmed(), "not configured".dimmed()),
            }
        }
    }

    Ok(())
}
