//! CLI command handlers, one file per command.

mod background;
mod key;
mod pets;

pub use background::run_background;
pub use key::run_key;
pub use pets::{render_pets, run_pets};
