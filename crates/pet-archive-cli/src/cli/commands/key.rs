//! Key command: print the `k` parameter of a pet link.

use anyhow::Result;
use pet_archive_core::extract_key;

pub fn run_key(url: &str) -> Result<()> {
    match extract_key(url) {
        Some(key) => {
            println!("{}", key);
            Ok(())
        }
        None => anyhow::bail!("no `k` parameter in {}", url),
    }
}
