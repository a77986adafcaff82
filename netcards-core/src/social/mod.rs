// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Network Support
//!
//! Profile URL normalization for the networks exchanged as labeled vCard
//! URLs (LinkedIn, Twitter, GitHub).

mod network;

pub use network::{has_scheme, twitter_handle, SocialNetwork};
