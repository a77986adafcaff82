//! Encode Command
//!
//! Turns contact JSON into vCard text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{load_contacts, render_vcards, validate_all};
use crate::display;

/// Encodes every contact in `input`, to `output` or stdout.
pub fn run(input: &Path, output: Option<&Path>, fold: bool) -> Result<()> {
    let contacts = load_contacts(input)?;
    validate_all(&contacts)?;

    let text = render_vcards(&contacts, fold);

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            display::success(&format!(
                "Encoded {} contact(s) to {}",
                contacts.len(),
                path.display()
            ));
        }
        None => print!("{}", text),
    }

    Ok(())
}
