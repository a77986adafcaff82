//! Export Command
//!
//! Writes contacts to a .vcf file, all of them or those from one event.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::{load_contacts, render_vcards, validate_all};
use crate::config::CliConfig;
use crate::display;

pub fn run(config: &CliConfig, input: &Path, event: Option<&str>, fold: bool) -> Result<()> {
    let mut contacts = load_contacts(input)?;

    if let Some(event) = event {
        contacts.retain(|c| c.has_event(event));
        if contacts.is_empty() {
            bail!("No contacts found for event \"{}\"", event);
        }
    } else if contacts.is_empty() {
        bail!("No contacts to export");
    }
    validate_all(&contacts)?;

    let path = config.export_path(event);
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;
    fs::write(&path, render_vcards(&contacts, fold))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    display::success(&format!(
        "Exported {} contact(s) to {}",
        contacts.len(),
        path.display()
    ));
    Ok(())
}
