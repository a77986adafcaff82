// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard generation.

use super::{BEGIN_LINE, BRANDING, CRLF, END_LINE, ESCAPED_NEWLINE, VERSION_LINE};
use crate::contact::{non_empty, Contact};
use crate::social::SocialNetwork;

/// Exports a contact as a single vCard 3.0 block.
///
/// Every line, including `END:VCARD`, ends in CRLF. Lines are not folded;
/// see [`fold`](super::fold) for producers that need it.
///
/// ```
/// use netcards_core::{vcard, Contact};
///
/// let card = vcard::encode(&Contact::new("Ada Lovelace"));
/// assert!(card.contains("N:Lovelace;Ada;;;\r\n"));
/// assert!(card.ends_with("END:VCARD\r\n"));
/// ```
pub fn encode(contact: &Contact) -> String {
    let mut lines = vec![BEGIN_LINE.to_string(), VERSION_LINE.to_string()];

    if let Some(name) = non_empty(&contact.name) {
        let (first, last) = split_name(name);
        lines.push(format!("N:{};{};;;", last, first));
        lines.push(format!("FN:{}", name));
    }

    let single_valued = [
        ("EMAIL;TYPE=INTERNET", &contact.email),
        ("TEL;TYPE=CELL", &contact.phone),
        ("ORG", &contact.company),
        ("TITLE", &contact.title),
        ("URL", &contact.website),
    ];
    for (property, field) in single_valued {
        if let Some(value) = non_empty(field) {
            lines.push(format!("{}:{}", property, value));
        }
    }

    // Apple-style grouping so address books show "LinkedIn" etc. as the link label.
    let mut item = 1;
    for network in SocialNetwork::ALL {
        if let Some(value) = contact.social(network) {
            lines.push(format!("item{}.URL:{}", item, network.profile_url(value)));
            lines.push(format!("item{}.X-ABLabel:{}", item, network.label()));
            item += 1;
        }
    }

    lines.push(format!("NOTE:{}", note_text(contact)));

    if !contact.tags.is_empty() {
        lines.push(format!("CATEGORIES:{}", contact.tags.join(",")));
    }

    lines.push(END_LINE.to_string());

    let mut vcard = String::with_capacity(lines.iter().map(|l| l.len() + CRLF.len()).sum());
    for line in &lines {
        vcard.push_str(line);
        vcard.push_str(CRLF);
    }
    vcard
}

/// Exports several contacts back to back, in order.
pub fn encode_all(contacts: &[Contact]) -> String {
    contacts.iter().map(encode).collect()
}

/// Splits a display name into `(first, last)` for the `N` property.
fn split_name(name: &str) -> (&str, String) {
    let mut tokens = name.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Builds the NOTE value: optional event line, then the branding line.
fn note_text(contact: &Contact) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(event) = non_empty(&contact.event) {
        parts.push(format!("Event: {}", event));
    }
    parts.push(BRANDING.to_string());
    parts.join(ESCAPED_NEWLINE)
}
