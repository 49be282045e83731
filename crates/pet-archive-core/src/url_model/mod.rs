//! URL helpers for pet images and pet pages.
//!
//! Both helpers are total: a string that is not an absolute URL is handled by
//! a defined fallback instead of an error.

mod background;
mod key;

pub use background::{set_background, set_query_param, BACKGROUND_PARAM};
pub use key::{extract_key, KEY_PARAM};
