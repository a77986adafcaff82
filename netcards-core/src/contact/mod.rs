// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! The flat contact record shared by the profile screen, the scanner and the
//! vCard codec. Every field is plain text; an empty string counts as unset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::social::SocialNetwork;

/// Contact validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact name cannot be empty")]
    MissingName,
}

/// A contact (or the user's own profile).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier assigned by the record store. Never read by the codec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Free text; several events are separated by commas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// ISO-8601 capture time, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Contact {
    /// Creates a contact with only a name set.
    pub fn new(name: &str) -> Self {
        Contact {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Returns true if the contact has a non-empty name.
    pub fn has_name(&self) -> bool {
        non_empty(&self.name).is_some()
    }

    /// Checks what the record store requires before persisting a contact.
    pub fn validate(&self) -> Result<(), ContactError> {
        if !self.has_name() {
            return Err(ContactError::MissingName);
        }
        Ok(())
    }

    /// Returns the stored profile value for a social network.
    pub fn social(&self, network: SocialNetwork) -> Option<&str> {
        match network {
            SocialNetwork::LinkedIn => non_empty(&self.linkedin),
            SocialNetwork::Twitter => non_empty(&self.twitter),
            SocialNetwork::GitHub => non_empty(&self.github),
        }
    }

    pub(crate) fn social_mut(&mut self, network: SocialNetwork) -> &mut Option<String> {
        match network {
            SocialNetwork::LinkedIn => &mut self.linkedin,
            SocialNetwork::Twitter => &mut self.twitter,
            SocialNetwork::GitHub => &mut self.github,
        }
    }

    /// Returns the individual event names, trimmed, without empties.
    pub fn events(&self) -> Vec<&str> {
        self.event
            .as_deref()
            .map(|events| {
                events
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if `event` is one of this contact's events.
    pub fn has_event(&self, event: &str) -> bool {
        let event = event.trim();
        self.events().iter().any(|e| *e == event)
    }

    /// Case-insensitive substring search over name, email, company and title.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name, &self.email, &self.company, &self.title]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .any(|value| value.to_lowercase().contains(&query))
    }
}

/// Returns the sorted, de-duplicated event names across `contacts`.
pub fn all_events(contacts: &[Contact]) -> Vec<String> {
    let mut events: Vec<String> = contacts
        .iter()
        .flat_map(|c| c.events())
        .map(str::to_string)
        .collect();
    events.sort();
    events.dedup();
    events
}

/// Orders contacts newest first by `timestamp`; undated contacts go last.
///
/// Timestamps compare as ISO-8601 text. The sort is stable, so contacts
/// with equal or missing timestamps keep their relative order.
pub fn sort_newest_first(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| non_empty(&b.timestamp).cmp(&non_empty(&a.timestamp)));
}

/// Treats `Some("")` the same as `None`.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
