//! CLI for the pet archive helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pet_archive_core::config;

use commands::{run_background, run_key, run_pets};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pet-archive")]
#[command(about = "Pet archive helpers: load pets, recolor images, read pet keys", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format for `pets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PetsFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Tab-separated table with a header row.
    Tsv,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load the pet archive CSV and print its records.
    Pets {
        /// Path (relative to the asset root) or http(s) URL; defaults to `csv_source` from config.
        #[arg(long)]
        source: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = PetsFormat::Json)]
        format: PetsFormat,
    },

    /// Print an image URL with its `bg` parameter set to the given color.
    Background {
        /// Image URL to rewrite.
        image_url: String,
        /// Color, with or without a leading `#` (e.g. "#ff00aa").
        color: String,
    },

    /// Print the `k` parameter of a pet link.
    Key {
        /// Absolute URL or URL-like string (e.g. "/view?k=abc").
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Pets { source, format } => {
                run_pets(&cfg, source.as_deref(), format).await?
            }
            CliCommand::Background { image_url, color } => run_background(&image_url, &color)?,
            CliCommand::Key { url } => run_key(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
