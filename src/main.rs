//! Sentenza CLI - LLM-backed text analysis and summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::bail;
use clap::{Parser, Subcommand};
use colored::Colorize;
use sentenza::agent::{self, GeminiGenerator};
use sentenza::{document, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentenza")]
#[command(author, version, about = "CLI for LLM-backed text analysis and summarisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse text for sentiment, topics, word count, and readability
    Analyse {
        /// Text to analyse (omit when using --file)
        text: Option<String>,
        /// Read the input from a PDF, DOCX, or TXT file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print the parsed fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarise text in a handful of sentences
    Summarise {
        /// Text to summarise (omit when using --file)
        text: Option<String>,
        /// Read the input from a PDF, DOCX, or TXT file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Show the extracted text instead of a summary
        #[arg(long)]
        raw: bool,
    },
    /// Generate an abstract and keywords for a document
    Research {
        /// Read the input from a PDF, DOCX, or TXT file
        #[arg(long)]
        file: PathBuf,
        /// Approximate abstract length in words
        #[arg(long, default_value_t = 300)]
        words: usize,
        /// Number of keywords or key phrases
        #[arg(long, default_value_t = 5)]
        keywords: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse { text, file, json } => {
            let input = resolve_input(text, file)?;
            let generator = build_generator()?;

            let parsed = agent::analyse(&generator, &input).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                print_field("📊 Sentiment", &parsed.sentiment);
                print_field("🧩 Topics", &parsed.topics);
                print_field("🔢 Word Count", &parsed.word_count);
                print_field("📘 Readability Score", &parsed.readability);
            }
        }
        Commands::Summarise { text, file, raw } => {
            let input = resolve_input(text, file)?;

            if raw {
                // Just show the extracted text
                println!("{}", input);
                println!("\n--- Extracted {} characters ---", input.chars().count());
            } else {
                let generator = build_generator()?;

                println!("Summarising {} characters...\n", input.chars().count());
                let summary = agent::summarise(&generator, &input).await?;

                println!("{}", "📝 Summary".bold());
                println!("{}", summary);
            }
        }
        Commands::Research {
            file,
            words,
            keywords,
        } => {
            let input = document::read_document(&file)?;
            let generator = build_generator()?;

            println!("Processing {}...\n", file.display());
            let research = agent::research(&generator, &input, words, keywords).await?;

            println!("{}", "🧾 Abstract".bold());
            println!("{}\n", research.abstract_text);
            println!("{}", "🔑 Keywords".bold());
            println!("{}", research.keywords);
        }
    }

    Ok(())
}

/// Take the input from the positional argument or the given file.
fn resolve_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => Ok(document::read_document(&path)?),
        (Some(_), Some(_)) => bail!("provide either TEXT or --file, not both"),
        (None, None) => bail!("no input: provide TEXT or --file"),
    }
}

fn build_generator() -> anyhow::Result<GeminiGenerator> {
    let config = Config::load()?;
    Ok(GeminiGenerator::from_config(&config)?)
}

/// Print a labelled section, marking absent fields instead of hiding them.
fn print_field(heading: &str, value: &str) {
    println!("{}", heading.bold());
    if value.is_empty() {
        println!("{}\n", "(not found in reply)".dimmed());
    } else {
        println!("{}\n", value);
    }
}
