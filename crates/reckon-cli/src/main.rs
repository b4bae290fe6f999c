//! Reckon CLI - evaluate calculator notebooks from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reckon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "reckon")]
#[command(author, version, about = "Line-oriented calculator notebook")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a notebook and print one result per line
    Run {
        /// Notebook file (default: stdin)
        file: Option<PathBuf>,

        /// Fractional digits for non-integral results
        #[arg(long, default_value = "2")]
        decimal_places: u32,

        /// Decimal point character
        #[arg(long, default_value = ".")]
        decimal_separator: char,

        /// Digit grouping character
        #[arg(long, default_value = ",")]
        thousands_separator: char,
    },

    /// Print the keyword vocabulary used for editor highlighting
    Keywords,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            decimal_places,
            decimal_separator,
            thousands_separator,
        } => run(
            file.as_deref(),
            Preferences {
                decimal_places,
                decimal_separator,
                thousands_separator,
            },
        ),
        Commands::Keywords => {
            for keyword in KEYWORDS {
                println!("{keyword}");
            }
            Ok(())
        }
    }
}

fn run(file: Option<&Path>, preferences: Preferences) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    // A trailing newline would otherwise add a phantom blank result
    let text = text.strip_suffix('\n').unwrap_or(&text);

    for result in evaluate_document(text, &preferences) {
        println!("{result}");
    }

    Ok(())
}
