//! CLI Commands

pub mod decode;
pub mod encode;
pub mod events;
pub mod export;
pub mod qr;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use netcards_core::vcard;
use netcards_core::Contact;
use serde::Deserialize;
use tracing::debug;

/// A contacts file holds either one record or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContactsFile {
    Many(Vec<Contact>),
    One(Contact),
}

/// Reads contacts from a JSON file.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: ContactsFile = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a contact or a list of contacts", path.display()))?;

    let contacts = match file {
        ContactsFile::Many(contacts) => contacts,
        ContactsFile::One(contact) => vec![contact],
    };
    debug!(count = contacts.len(), path = %path.display(), "loaded contacts");
    Ok(contacts)
}

/// Rejects contacts the record store would refuse (no name).
pub fn validate_all(contacts: &[Contact]) -> Result<()> {
    for (index, contact) in contacts.iter().enumerate() {
        contact
            .validate()
            .with_context(|| format!("Contact #{} is invalid", index + 1))?;
    }
    Ok(())
}

/// Encodes contacts, folding long lines if asked.
pub fn render_vcards(contacts: &[Contact], fold: bool) -> String {
    let text = vcard::encode_all(contacts);
    if fold {
        vcard::fold(&text)
    } else {
        text
    }
}
