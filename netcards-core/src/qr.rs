// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Payload Capacity
//!
//! Cards are shared as a single QR symbol at the lowest error-correction
//! level. This module checks whether an encoded card fits before it is
//! handed to a renderer.

use qrcode::types::{QrError, Version};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;
use tracing::debug;

/// Error-correction level used for shared cards.
pub const EC_LEVEL: EcLevel = EcLevel::L;

/// Largest byte payload a version 40 symbol holds at level L.
pub const MAX_PAYLOAD_BYTES: usize = 2953;

/// Size above which phone cameras struggle to read the dense symbol.
pub const PRACTICAL_PAYLOAD_LIMIT: usize = 2048;

/// QR payload errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QrPayloadError {
    #[error("Payload too large for a QR code ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },
    #[error("QR encoding failed: {0}")]
    Encoding(String),
}

/// The smallest symbol that carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrPayload {
    bytes: usize,
    version: i16,
    width: usize,
}

impl QrPayload {
    /// Payload length in bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// QR version (1-40) of the smallest symbol holding the payload.
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Symbol width in modules.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if the payload stays under [`PRACTICAL_PAYLOAD_LIMIT`].
    pub fn is_practical(&self) -> bool {
        self.bytes <= PRACTICAL_PAYLOAD_LIMIT
    }
}

/// Finds the smallest level-L symbol for `payload`.
///
/// ```
/// use netcards_core::{qr, vcard, Contact};
///
/// let card = vcard::encode(&Contact::new("Ada Lovelace"));
/// let fit = qr::check_qr_payload(&card).unwrap();
/// assert!(fit.is_practical());
/// ```
pub fn check_qr_payload(payload: &str) -> Result<QrPayload, QrPayloadError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EC_LEVEL).map_err(|e| {
        debug!(size = payload.len(), error = %e, "payload does not fit a QR symbol");
        match e {
            QrError::DataTooLong => QrPayloadError::TooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_BYTES,
            },
            other => QrPayloadError::Encoding(other.to_string()),
        }
    })?;

    let version = match code.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    };

    Ok(QrPayload {
        bytes: payload.len(),
        version,
        width: code.width(),
    })
}
