//! Decode Command
//!
//! Reads a .vcf file and prints the contacts as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use netcards_core::{sort_newest_first, vcard};

use crate::display;

/// Decodes every named card in `input`, optionally filtered, newest first.
pub fn run(input: &Path, event: Option<&str>, search: Option<&str>) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut contacts = vcard::decode_all(&text);
    if contacts.is_empty() {
        display::warning("No valid contacts found in file");
    }

    if let Some(event) = event {
        contacts.retain(|c| c.has_event(event));
    }
    if let Some(query) = search {
        contacts.retain(|c| c.matches_query(query));
    }
    sort_newest_first(&mut contacts);

    println!("{}", serde_json::to_string_pretty(&contacts)?);
    Ok(())
}
