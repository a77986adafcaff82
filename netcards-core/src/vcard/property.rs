// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content line parsing: group prefix, property name, parameters.

/// Group prefix used for labeled items (`item1.URL`).
const ITEM_GROUP_PREFIX: &str = "item";

/// The properties the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropertyKind {
    FormattedName,
    Email,
    Telephone,
    Organization,
    Title,
    Url,
    Note,
    Categories,
    Unknown,
}

impl PropertyKind {
    /// Resolves a bare property name (parameters already stripped).
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "FN" => PropertyKind::FormattedName,
            "EMAIL" => PropertyKind::Email,
            "TEL" => PropertyKind::Telephone,
            "ORG" => PropertyKind::Organization,
            "TITLE" => PropertyKind::Title,
            "URL" => PropertyKind::Url,
            "NOTE" => PropertyKind::Note,
            "CATEGORIES" => PropertyKind::Categories,
            _ => PropertyKind::Unknown,
        }
    }
}

/// One unfolded content line, split at its first colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentLine<'a> {
    /// Everything before the colon: group, name and parameters.
    pub property: &'a str,
    pub value: &'a str,
}

impl<'a> ContentLine<'a> {
    /// Splits a logical line. Lines without a property name are skipped.
    pub(crate) fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_start();
        match line.find(':') {
            Some(colon) if colon > 0 => Some(ContentLine {
                property: line[..colon].trim_end(),
                value: line[colon + 1..].trim_end(),
            }),
            _ => None,
        }
    }

    /// Returns `(group, rest)` for `item<N>.<rest>` properties.
    ///
    /// The group is lowercased so `ITEM1` and `item1` land together.
    pub(crate) fn item_group(&self) -> Option<(String, &'a str)> {
        let (group, rest) = self.property.split_once('.')?;
        let digits = group
            .get(..ITEM_GROUP_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(ITEM_GROUP_PREFIX))
            .map(|_| &group[ITEM_GROUP_PREFIX.len()..])?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || rest.is_empty() {
            return None;
        }
        Some((group.to_ascii_lowercase(), rest))
    }

    /// Property name with parameters removed.
    pub(crate) fn name(&self) -> &'a str {
        base_name(self.property)
    }

    pub(crate) fn kind(&self) -> PropertyKind {
        PropertyKind::from_name(self.name())
    }

    /// Value of the first `TYPE=` parameter, in its original case.
    pub(crate) fn type_param(&self) -> Option<&'a str> {
        self.property.split(';').skip(1).find_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("TYPE")
                .then(|| value.trim())
        })
    }
}

/// Strips `;PARAM=...` from a property string.
pub(crate) fn base_name(property: &str) -> &str {
    property
        .split_once(';')
        .map_or(property, |(name, _)| name)
        .trim()
}
