//! Pets command: load the archive and print it.

use anyhow::Result;
use pet_archive_core::config::PetArchiveConfig;
use pet_archive_core::fetch::DefaultFetcher;
use pet_archive_core::{load_pets_from, Pet};
use std::collections::BTreeSet;

use crate::cli::PetsFormat;

/// Load pets from the configured (or overridden) source and print them.
/// A failed load prints nothing; the failure is in the log.
pub async fn run_pets(
    cfg: &PetArchiveConfig,
    source: Option<&str>,
    format: PetsFormat,
) -> Result<()> {
    let source = cfg.resolve_source(source)?;
    let fetcher = DefaultFetcher::new(cfg.http_options());
    let pets = load_pets_from(&fetcher, &source).await;
    tracing::info!(%source, count = pets.len(), "pets loaded");
    print!("{}", render_pets(&pets, format)?);
    Ok(())
}

/// Render pets in the requested format. TSV columns are the union of all
/// pets' columns, sorted; tabs and newlines inside cells become spaces.
pub fn render_pets(pets: &[Pet], format: PetsFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        PetsFormat::Json => {
            for pet in pets {
                out.push_str(&serde_json::to_string(pet)?);
                out.push('\n');
            }
        }
        PetsFormat::Tsv => {
            if pets.is_empty() {
                return Ok(out);
            }
            let columns: BTreeSet<&str> = pets.iter().flat_map(|p| p.columns()).collect();
            out.push_str(&columns.iter().copied().collect::<Vec<_>>().join("\t"));
            out.push('\n');
            for pet in pets {
                let row: Vec<String> = columns
                    .iter()
                    .map(|c| tsv_cell(pet.get(c).unwrap_or("")))
                    .collect();
                out.push_str(&row.join("\t"));
                out.push('\n');
            }
        }
    }
    Ok(out)
}

fn tsv_cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
