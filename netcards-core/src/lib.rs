// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Netcards Core Library
//!
//! Business-card exchange over QR codes: the contact record, its vCard 3.0
//! codec, and QR payload sizing.

pub mod contact;
pub mod qr;
pub mod social;
pub mod vcard;

pub use contact::{all_events, sort_newest_first, Contact, ContactError};
pub use qr::{check_qr_payload, QrPayload, QrPayloadError};
pub use social::SocialNetwork;
pub use vcard::VCardError;
