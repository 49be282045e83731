//! Pet archive loading.
//!
//! Fetches the archive CSV and parses it into [`Pet`] records. The public
//! `load_pets*` functions fail softly: any fetch or parse failure is logged and
//! turned into an empty list. [`try_load_pets`] exposes the typed error.

mod parse;

pub use parse::parse_pets;

use thiserror::Error;

use crate::fetch::{DefaultFetcher, FetchError, Fetcher};
use crate::pet::Pet;
use crate::source::ResourceSource;

/// Built-in archive location, relative to the asset root.
pub const PET_ARCHIVE_CSV: &str = "assets/ChickenSmoothiePetArchive.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch {source_name}: {error}")]
    Fetch {
        source_name: String,
        #[source]
        error: FetchError,
    },
    #[error("parse {source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: csv::Error,
    },
}

/// Fetches `source` and parses it. Errors are returned, not logged.
pub async fn try_load_pets<F: Fetcher>(
    fetcher: &F,
    source: &ResourceSource,
) -> Result<Vec<Pet>, LoadError> {
    let text = fetcher
        .fetch_text(source)
        .await
        .map_err(|error| LoadError::Fetch {
            source_name: source.to_string(),
            error,
        })?;
    parse_pets(&text).map_err(|error| LoadError::Parse {
        source_name: source.to_string(),
        error,
    })
}

/// Loads pets from `source`; on any failure logs it and returns an empty list.
pub async fn load_pets_from<F: Fetcher>(fetcher: &F, source: &ResourceSource) -> Vec<Pet> {
    match try_load_pets(fetcher, source).await {
        Ok(pets) => {
            tracing::debug!(%source, count = pets.len(), "loaded pet archive");
            pets
        }
        Err(err) => {
            tracing::error!("error loading pet archive: {:#}", anyhow::Error::new(err));
            Vec::new()
        }
    }
}

/// Loads the built-in archive (`assets/ChickenSmoothiePetArchive.csv` under
/// the current directory) with the default fetcher.
pub async fn load_pets() -> Vec<Pet> {
    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!("error loading pet archive: current directory: {}", err);
            return Vec::new();
        }
    };
    match ResourceSource::resolve(PET_ARCHIVE_CSV, &root) {
        Ok(source) => load_pets_from(&DefaultFetcher::default(), &source).await,
        Err(err) => {
            tracing::error!("error loading pet archive: {}", err);
            Vec::new()
        }
    }
}
