//! QR Command
//!
//! Checks that a profile's vCard fits in one QR code.

use std::path::Path;

use anyhow::{bail, Context, Result};
use netcards_core::qr::PRACTICAL_PAYLOAD_LIMIT;
use netcards_core::{check_qr_payload, vcard};

use super::load_contacts;
use crate::display;

pub fn run(input: &Path) -> Result<()> {
    let mut contacts = load_contacts(input)?;
    if contacts.len() != 1 {
        bail!(
            "Expected a single profile in {}, found {} contacts",
            input.display(),
            contacts.len()
        );
    }
    let profile = contacts.remove(0);
    profile.validate().context("Profile is invalid")?;

    let card = vcard::encode(&profile);
    let payload = check_qr_payload(&card)?;

    display::display_qr_payload(&profile, &payload);
    if payload.is_practical() {
        display::success("Profile fits in a single QR code");
    } else {
        display::warning(&format!(
            "Payload exceeds {} bytes; many phone cameras will struggle to scan it",
            PRACTICAL_PAYLOAD_LIMIT
        ));
    }
    Ok(())
}
