//! Terminal output helpers.
//!
//! Status lines go to stderr; stdout carries only command output.

use console::style;
use netcards_core::{Contact, QrPayload};

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("ℹ").blue(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// One-line summary of a contact: name, then company and title if set.
pub fn contact_summary(contact: &Contact) -> String {
    let name = contact.name.as_deref().unwrap_or("(no name)");
    let role: Vec<&str> = [contact.title.as_deref(), contact.company.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if role.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, role.join(", "))
    }
}

pub fn display_qr_payload(contact: &Contact, payload: &QrPayload) {
    println!();
    println!("  Profile: {}", style(contact_summary(contact)).bold());
    println!("  Payload: {} bytes", payload.bytes());
    println!(
        "  Symbol:  version {} ({}x{} modules, error correction L)",
        payload.version(),
        payload.width(),
        payload.width()
    );
    println!();
}
