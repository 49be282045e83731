//! Background command: set `bg` on an image URL.

use anyhow::Result;
use pet_archive_core::set_background;

pub fn run_background(image_url: &str, color: &str) -> Result<()> {
    let rewritten = set_background(image_url, color);
    if rewritten == image_url {
        tracing::debug!("image url left unchanged: {}", image_url);
    }
    println!("{}", rewritten);
    Ok(())
}
