// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard parsing.
//!
//! Field policy: `FN`, `ORG`, `TITLE` and `CATEGORIES` keep the last value
//! seen; everything else keeps the first.

use tracing::debug;

use super::property::{base_name, ContentLine, PropertyKind};
use super::{VCardError, BEGIN_LINE, CRLF, END_LINE, ESCAPED_NEWLINE};
use crate::contact::{non_empty, Contact};
use crate::social::SocialNetwork;

/// Imports a single vCard block.
///
/// Never fails: unknown properties and lines without a name are ignored,
/// and a card without `FN` simply comes back without a name. Callers that
/// may receive several cards should use [`decode_all`].
///
/// Inside `NOTE`, an escaped `\n` (backslash, `n`) counts as a line break
/// just like a real newline.
pub fn decode(vcard: &str) -> Contact {
    let mut decoder = Decoder::default();
    let mut pending: Option<String> = None;

    for line in vcard.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        // Folded continuation: drop the single leading space or tab.
        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(logical) = pending.as_mut() {
                logical.push_str(continuation);
            }
            continue;
        }

        if let Some(logical) = pending.take() {
            decoder.dispatch(&logical);
        }
        pending = Some(line.to_string());
    }

    if let Some(logical) = pending {
        decoder.dispatch(&logical);
    }

    decoder.finish()
}

/// Imports raw scanner bytes. Fails only if they are not UTF-8.
pub fn decode_bytes(payload: &[u8]) -> Result<Contact, VCardError> {
    let text = std::str::from_utf8(payload).map_err(|e| {
        debug!(len = payload.len(), "rejecting non-UTF-8 vCard payload");
        VCardError::from(e)
    })?;
    Ok(decode(text))
}

/// Imports every card in a `.vcf` file, in order.
///
/// Cards without a name are dropped; one bad card never affects the others.
pub fn decode_all(text: &str) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for (index, chunk) in split_on_end_line(text).into_iter().enumerate() {
        let chunk = chunk.trim();
        if chunk.is_empty() || !chunk.contains(BEGIN_LINE) {
            continue;
        }

        let contact = decode(&format!("{}{}{}", chunk, CRLF, END_LINE));
        if contact.has_name() {
            contacts.push(contact);
        } else {
            debug!(index, "skipping vCard without a name");
        }
    }

    contacts
}

/// Splits on every `END:VCARD`, ignoring ASCII case.
fn split_on_end_line(text: &str) -> Vec<&str> {
    // ASCII uppercasing keeps byte offsets identical to `text`.
    let upper = text.to_ascii_uppercase();
    let mut chunks = Vec::new();
    let mut start = 0;
    for (pos, _) in upper.match_indices(END_LINE) {
        chunks.push(&text[start..pos]);
        start = pos + END_LINE.len();
    }
    chunks.push(&text[start..]);
    chunks
}

/// `item<N>` group collected while reading lines.
#[derive(Debug, Default)]
struct ItemGroup {
    name: String,
    url: Option<String>,
    label: Option<String>,
}

#[derive(Debug, Default)]
struct Decoder {
    contact: Contact,
    groups: Vec<ItemGroup>,
}

impl Decoder {
    fn dispatch(&mut self, logical: &str) {
        let Some(line) = ContentLine::parse(logical) else {
            return;
        };

        if let Some((group, rest)) = line.item_group() {
            self.record_item(group, rest, line.value);
            return;
        }

        let value = line.value;
        match line.kind() {
            PropertyKind::FormattedName => self.contact.name = Some(value.to_string()),
            PropertyKind::Email => set_if_unset(&mut self.contact.email, value),
            PropertyKind::Telephone => set_if_unset(&mut self.contact.phone, value),
            PropertyKind::Organization => self.contact.company = Some(value.to_string()),
            PropertyKind::Title => self.contact.title = Some(value.to_string()),
            PropertyKind::Url => self.url(line.type_param(), value),
            PropertyKind::Note => self.note(value),
            PropertyKind::Categories => {
                self.contact.tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            PropertyKind::Unknown => {}
        }
    }

    fn record_item(&mut self, group: String, rest: &str, value: &str) {
        let index = match self.groups.iter().position(|g| g.name == group) {
            Some(index) => index,
            None => {
                self.groups.push(ItemGroup {
                    name: group,
                    ..Default::default()
                });
                self.groups.len() - 1
            }
        };
        let item = &mut self.groups[index];

        let name = base_name(rest);
        if name.eq_ignore_ascii_case("URL") {
            item.url = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("X-ABLabel") {
            item.label = Some(value.to_string());
        }
    }

    /// Bare `URL`: routed by its `TYPE` parameter, otherwise the website.
    fn url(&mut self, type_param: Option<&str>, value: &str) {
        match type_param.and_then(SocialNetwork::from_label) {
            Some(network) => self.set_social(network, network.stored_value(value)),
            None => set_if_unset(&mut self.contact.website, value),
        }
    }

    /// Reads `key: value` lines out of NOTE.
    ///
    /// Lines are separated by real newlines or by the escaped `\n` that
    /// [`encode`](super::encode) writes.
    fn note(&mut self, value: &str) {
        for line in value.split('\n').flat_map(|l| l.split(ESCAPED_NEWLINE)) {
            let Some((key, entry)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let entry = entry.trim();

            match key.to_ascii_lowercase().as_str() {
                "event" => set_if_unset(&mut self.contact.event, entry),
                "added" | "timestamp" => set_if_unset(&mut self.contact.timestamp, entry),
                other => {
                    if let Some(network) = SocialNetwork::from_label(other) {
                        self.set_social(network, entry.to_string());
                    }
                }
            }
        }
    }

    fn set_social(&mut self, network: SocialNetwork, value: String) {
        let field = self.contact.social_mut(network);
        if non_empty(field).is_none() {
            *field = Some(value);
        }
    }

    /// Resolves labeled item groups once every line has been read.
    fn finish(mut self) -> Contact {
        for group in std::mem::take(&mut self.groups) {
            let (Some(url), Some(label)) = (group.url, group.label) else {
                continue;
            };
            if let Some(network) = SocialNetwork::from_label(&label) {
                self.set_social(network, network.stored_value(&url));
            }
        }
        self.contact
    }
}

fn set_if_unset(field: &mut Option<String>, value: &str) {
    if non_empty(field).is_none() {
        *field = Some(value.to_string());
    }
}
