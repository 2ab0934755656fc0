use anyhow::Context;
use clap::{Parser, Subcommand};
use precis_charts::{ChartRenderer, PngChartRenderer};
use precis_core::constants::{DEFAULT_SUMMARY_SENTENCES, DEFAULT_TOP_WORDS};
use precis_core::validation::{validate_sentence_count, validate_top_words};
use precis_core::{analyse, Summariser};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "precis")]
#[command(about = "Frequency-based extractive text summariser")]
struct Cli {
    /// Stop-word language (ISO 639-1 code or English name)
    #[arg(long, global = true, default_value = "en")]
    language: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary of a text
    Summarise {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
        /// Maximum number of sentences
        #[arg(long, short = 'n', default_value_t = DEFAULT_SUMMARY_SENTENCES)]
        sentences: usize,
        /// Also render the word cloud, bar chart and pie chart into this directory
        #[arg(long)]
        charts: Option<PathBuf>,
    },
    /// Print the most frequent words of a text with their normalised scores
    Frequencies {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
        /// Number of words to print
        #[arg(long, default_value_t = DEFAULT_TOP_WORDS)]
        top: usize,
    },
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let summariser = Summariser::for_language(&cli.language);

    match cli.command {
        Commands::Summarise {
            file,
            sentences,
            charts,
        } => {
            validate_sentence_count(sentences)?;
            let text = read_input(file.as_deref())?;
            let analysis = analyse(&summariser, &text, sentences, DEFAULT_TOP_WORDS);

            if analysis.summary.is_empty() {
                eprintln!("Not enough text to summarise.");
            } else {
                println!("{}", analysis.summary);
            }

            if let Some(dir) = charts {
                if analysis.is_degenerate() {
                    eprintln!("No words to chart, skipping charts.");
                } else {
                    std::fs::create_dir_all(&dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                    let set = PngChartRenderer::new().render(&analysis.top_words, &dir)?;
                    eprintln!(
                        "Charts written: {}, {}, {}",
                        set.word_cloud.display(),
                        set.bar_chart.display(),
                        set.pie_chart.display()
                    );
                }
            }
        }
        Commands::Frequencies { file, top } => {
            validate_top_words(top)?;
            let text = read_input(file.as_deref())?;
            let table = summariser.word_frequencies(&text);
            if table.is_empty() {
                println!("No words found.");
            } else {
                for entry in table.top(top) {
                    println!("{:<20} {:.3}", entry.word, entry.score);
                }
            }
        }
    }

    Ok(())
}
