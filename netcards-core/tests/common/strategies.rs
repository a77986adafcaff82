// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Contacts whose values avoid the characters the vCard format reserves
//! (CR, LF, `:`, `;`, `,` and backslash), except where a field is a URL.

use netcards_core::Contact;
use proptest::prelude::*;

// ============================================================
// Field Strategies
// ============================================================

/// Display names: one to three capitalised words.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,10}){0,2}"
}

pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10,15}".prop_map(|n| format!("+{}", n))
}

/// Free text without reserved characters or edge whitespace.
pub fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 &.-]{0,30}[A-Za-z0-9]"
}

pub fn website_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,4}").prop_map(|(domain, tld)| format!("{}.{}/about", domain, tld))
}

pub fn linkedin_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,12}".prop_map(|user| format!("https://linkedin.com/in/{}", user))
}

pub fn twitter_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,14}".prop_map(|handle| format!("@{}", handle))
}

pub fn github_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,12}".prop_map(|user| format!("https://github.com/{}", user))
}

pub fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9-]{0,11}", 0..5)
}

// ============================================================
// Composite Strategies
// ============================================================

/// A named contact with any subset of the other fields set.
pub fn contact_strategy() -> impl Strategy<Value = Contact> {
    let details = (
        name_strategy(),
        prop::option::of(email_strategy()),
        prop::option::of(phone_strategy()),
        prop::option::of(text_strategy()),
        prop::option::of(text_strategy()),
        prop::option::of(website_strategy()),
    );
    let extras = (
        prop::option::of(linkedin_strategy()),
        prop::option::of(twitter_strategy()),
        prop::option::of(github_strategy()),
        prop::option::of(text_strategy()),
        tags_strategy(),
    );

    (details, extras).prop_map(
        |(
            (name, email, phone, company, title, website),
            (linkedin, twitter, github, event, tags),
        )| Contact {
            id: None,
            name: Some(name),
            email,
            phone,
            company,
            title,
            website,
            linkedin,
            twitter,
            github,
            event,
            tags,
            timestamp: None,
        },
    )
}

pub fn contacts_strategy(max: usize) -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(contact_strategy(), 0..=max)
}
