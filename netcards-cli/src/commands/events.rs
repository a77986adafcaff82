//! Events Command

use std::path::Path;

use anyhow::Result;
use netcards_core::all_events;

use super::load_contacts;
use crate::display;

/// Prints each distinct event name, sorted, one per line.
pub fn run(input: &Path) -> Result<()> {
    let contacts = load_contacts(input)?;
    let events = all_events(&contacts);

    if events.is_empty() {
        display::info("No events recorded for these contacts");
        return Ok(());
    }

    for event in events {
        println!("{}", event);
    }
    Ok(())
}
