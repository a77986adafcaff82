// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard 3.0 Export/Import
//!
//! Converts [`Contact`](crate::Contact) records to and from the vCard text
//! that goes into QR codes and `.vcf` files. Beyond the standard properties
//! this covers two compatibility conventions:
//!
//! - social profiles travel as `item<N>.URL` + `item<N>.X-ABLabel` pairs,
//!   which mobile address books display as labeled links;
//! - the event name rides in `NOTE` as `Event: <name>` followed by a
//!   branding line.
//!
//! Every function here is pure. Decoding never fails on malformed text; it
//! returns whatever fields it could recognise.

mod decode;
mod encode;
mod fold;
mod property;

pub use decode::{decode, decode_all, decode_bytes};
pub use encode::{encode, encode_all};
pub use fold::{fold, fold_line, MAX_LINE_OCTETS};

use thiserror::Error;

/// Opening line of every card.
pub const BEGIN_LINE: &str = "BEGIN:VCARD";

/// Closing line of every card; also the batch split marker.
pub const END_LINE: &str = "END:VCARD";

/// Version line emitted after `BEGIN:VCARD`.
pub const VERSION_LINE: &str = "VERSION:3.0";

/// Line terminator.
pub const CRLF: &str = "\r\n";

/// Escaped newline inside a single-line value (backslash followed by `n`).
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Closing line of every generated `NOTE`.
pub const BRANDING: &str = "Via netcards.app";

/// vCard decoding errors.
#[derive(Debug, Error)]
pub enum VCardError {
    #[error("vCard payload is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}
