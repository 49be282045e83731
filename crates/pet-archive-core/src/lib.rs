pub mod config;
pub mod logging;

pub mod csv_loader;
pub mod fetch;
pub mod pet;
pub mod source;
pub mod url_model;

pub use csv_loader::{load_pets, load_pets_from, try_load_pets, LoadError, PET_ARCHIVE_CSV};
pub use pet::Pet;
pub use url_model::{extract_key, set_background};
