mod automaton;
mod output;

use anyhow::{Context, Result};
use automaton::SuffixAutomaton;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sax")]
#[command(about = "Suffix automaton substring index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the distinct non-empty substrings of the text
    Count {
        /// Text to index (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the lexicographically k-th distinct substring
    Kth {
        /// Rank of the substring, 1-indexed
        k: u64,

        /// Text to index (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Test whether a pattern occurs in the text
    Contains {
        /// Pattern to look up
        pattern: String,

        /// Text to index (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show automaton statistics for the text
    Stats {
        /// Text to index (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count { text, file } => {
            let text = read_input(text, file)?;
            let sa = SuffixAutomaton::from_bytes(&text);
            println!("{}", sa.distinct_substrings()?);
        }
        Commands::Kth {
            k,
            text,
            file,
            no_color,
        } => {
            let text = read_input(text, file)?;
            let sa = SuffixAutomaton::from_bytes(&text);
            let substring = sa.kth_substring(k)?;
            output::print_substring(&substring, !no_color)?;
        }
        Commands::Contains {
            pattern,
            text,
            file,
            no_color,
        } => {
            let text = read_input(text, file)?;
            let sa = SuffixAutomaton::from_bytes(&text);
            let found = sa.contains(pattern.as_bytes());
            output::print_contains_verdict(pattern.as_bytes(), found, !no_color)?;
            if !found {
                // ripgrep-style exit status: 1 for no match
                std::process::exit(1);
            }
        }
        Commands::Stats {
            text,
            file,
            json,
            no_color,
        } => {
            let text = read_input(text, file)?;
            let sa = SuffixAutomaton::from_bytes(&text);
            let stats = sa.stats()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                output::print_stats(&stats, !no_color)?;
            }
        }
    }

    Ok(())
}

/// Resolve the text to index: positional arg, --file, or stdin
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }
    if let Some(path) = file {
        return std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
