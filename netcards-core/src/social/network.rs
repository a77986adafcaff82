// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Labeled Social Networks
//!
//! The three networks that travel as labeled URLs inside a vCard.

use std::fmt;

/// Host prefix used to build and recognise Twitter profile URLs.
const TWITTER_HOST: &str = "twitter.com/";

/// A social network carried as an `item<N>.URL` / `item<N>.X-ABLabel` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    LinkedIn,
    Twitter,
    GitHub,
}

impl SocialNetwork {
    /// All networks, in the order their items are emitted.
    pub const ALL: [SocialNetwork; 3] = [
        SocialNetwork::LinkedIn,
        SocialNetwork::Twitter,
        SocialNetwork::GitHub,
    ];

    /// Returns the lowercase identifier (also the `TYPE=` and NOTE key).
    pub fn id(&self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "linkedin",
            SocialNetwork::Twitter => "twitter",
            SocialNetwork::GitHub => "github",
        }
    }

    /// Returns the exact `X-ABLabel` value address books expect.
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::GitHub => "GitHub",
        }
    }

    /// Looks a network up by identifier or label, ignoring ASCII case.
    ///
    /// ```
    /// use netcards_core::social::SocialNetwork;
    ///
    /// assert_eq!(SocialNetwork::from_label("GITHUB"), Some(SocialNetwork::GitHub));
    /// assert_eq!(SocialNetwork::from_label("Mastodon"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|network| network.id().eq_ignore_ascii_case(label))
    }

    /// Builds the URL emitted for a stored profile value.
    ///
    /// LinkedIn and GitHub values get `https://` unless they already carry a
    /// scheme. Twitter values are handles: a leading `@` is dropped and the
    /// handle is appended to `https://twitter.com/`.
    ///
    /// ```
    /// use netcards_core::social::SocialNetwork;
    ///
    /// assert_eq!(
    ///     SocialNetwork::Twitter.profile_url("@ada"),
    ///     "https://twitter.com/ada"
    /// );
    /// assert_eq!(
    ///     SocialNetwork::GitHub.profile_url("github.com/ada"),
    ///     "https://github.com/ada"
    /// );
    /// ```
    pub fn profile_url(&self, value: &str) -> String {
        match self {
            SocialNetwork::Twitter => {
                let handle = value.strip_prefix('@').unwrap_or(value);
                format!("https://{}{}", TWITTER_HOST, handle)
            }
            SocialNetwork::LinkedIn | SocialNetwork::GitHub => {
                if has_scheme(value) {
                    value.to_string()
                } else {
                    format!("https://{}", value)
                }
            }
        }
    }

    /// Turns a decoded URL back into the value stored on a contact.
    ///
    /// Only Twitter is rewritten (into an `@handle`); the other networks keep
    /// the URL verbatim.
    pub fn stored_value(&self, url: &str) -> String {
        match self {
            SocialNetwork::Twitter => twitter_handle(url),
            SocialNetwork::LinkedIn | SocialNetwork::GitHub => url.to_string(),
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns true if `value` starts with a URI scheme followed by `://`.
pub fn has_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}

/// Extracts `@handle` from a `twitter.com/<handle>` URL.
///
/// The handle runs up to the next `/` or `?`. Falls back to the input
/// unchanged when no non-empty handle follows any `twitter.com/`.
pub fn twitter_handle(url: &str) -> String {
    for (pos, _) in url.match_indices(TWITTER_HOST) {
        let rest = &url[pos + TWITTER_HOST.len()..];
        let end = rest.find(['/', '?']).unwrap_or(rest.len());
        if end > 0 {
            return format!("@{}", &rest[..end]);
        }
    }
    url.to_string()
}
