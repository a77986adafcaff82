// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for contact

use netcards_core::{all_events, sort_newest_first, Contact, ContactError, SocialNetwork};

#[test]
fn test_new_contact() {
    let contact = Contact::new("Ada Lovelace");
    assert_eq!(contact.name.as_deref(), Some("Ada Lovelace"));
    assert!(contact.has_name());
    assert!(contact.tags.is_empty());
    assert_eq!(contact.email, None);
}

#[test]
fn test_validate_requires_name() {
    assert!(Contact::new("Ada").validate().is_ok());
    assert_eq!(Contact::default().validate(), Err(ContactError::MissingName));
    assert_eq!(Contact::new("").validate(), Err(ContactError::MissingName));
}

#[test]
fn test_events_split_on_commas() {
    let contact = Contact {
        event: Some("RustConf, DevCon ,, Meetup".to_string()),
        ..Contact::new("Ada")
    };
    assert_eq!(contact.events(), vec!["RustConf", "DevCon", "Meetup"]);
    assert!(contact.has_event("DevCon"));
    assert!(contact.has_event(" Meetup "));
    assert!(!contact.has_event("Dev"));
}

#[test]
fn test_events_empty_when_unset() {
    assert!(Contact::new("Ada").events().is_empty());
}

#[test]
fn test_all_events_sorted_and_unique() {
    let contacts = vec![
        Contact {
            event: Some("RustConf, DevCon".to_string()),
            ..Contact::new("Ada")
        },
        Contact {
            event: Some("DevCon".to_string()),
            ..Contact::new("Alan")
        },
        Contact::new("Grace"),
    ];
    assert_eq!(
        all_events(&contacts),
        vec!["DevCon".to_string(), "RustConf".to_string()]
    );
}

#[test]
fn test_matches_query() {
    let contact = Contact {
        email: Some("ada@engines.org".to_string()),
        company: Some("Analytical Engines".to_string()),
        title: Some("Mathematician".to_string()),
        phone: Some("+1555".to_string()),
        ..Contact::new("Ada Lovelace")
    };

    assert!(contact.matches_query("lovelace"));
    assert!(contact.matches_query("ENGINES.ORG"));
    assert!(contact.matches_query("analytical"));
    assert!(contact.matches_query("math"));
    assert!(!contact.matches_query("1555"));
}

#[test]
fn test_social_accessor_ignores_empty() {
    let contact = Contact {
        github: Some(String::new()),
        twitter: Some("@ada".to_string()),
        ..Contact::new("Ada")
    };
    assert_eq!(contact.social(SocialNetwork::GitHub), None);
    assert_eq!(contact.social(SocialNetwork::Twitter), Some("@ada"));
}

#[test]
fn test_json_omits_unset_fields() {
    let json = serde_json::to_string(&Contact::new("Ada")).unwrap();
    assert_eq!(json, r#"{"name":"Ada"}"#);
}

#[test]
fn test_json_from_storage_record() {
    let json = r#"{
        "id": 42,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "tags": ["vip"],
        "timestamp": "2026-10-16T09:30:00.000Z"
    }"#;

    let contact: Contact = serde_json::from_str(json).unwrap();
    assert_eq!(contact.id, Some(42));
    assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
    assert_eq!(contact.tags, vec!["vip".to_string()]);
    assert_eq!(contact.timestamp.as_deref(), Some("2026-10-16T09:30:00.000Z"));
}

#[test]
fn test_sort_newest_first_puts_undated_last() {
    let dated = |name: &str, timestamp: &str| Contact {
        timestamp: Some(timestamp.to_string()),
        ..Contact::new(name)
    };
    let mut contacts = vec![
        Contact::new("Undated A"),
        dated("Old", "2026-01-05T09:00:00Z"),
        dated("Blank", ""),
        dated("New", "2026-10-16T18:30:00Z"),
        Contact::new("Undated B"),
    ];

    sort_newest_first(&mut contacts);

    let names: Vec<&str> = contacts.iter().filter_map(|c| c.name.as_deref()).collect();
    assert_eq!(names, vec!["New", "Old", "Undated A", "Blank", "Undated B"]);
}
