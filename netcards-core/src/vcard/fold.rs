// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard line folding.
//!
//! [`encode`](super::encode) keeps lines unfolded so QR payloads stay
//! small; folding is opt-in for `.vcf` consumers that insist on it.

use super::CRLF;

/// Maximum physical line length in octets, continuation space included.
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds one content line (without its terminator).
///
/// Breaks are CRLF followed by a single space and never split a UTF-8
/// character.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();
        if current_len + char_len > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            current_len = 1;
        }
        folded.push(c);
        current_len += char_len;
    }

    folded
}

/// Folds every line of an encoded card or batch, keeping line endings.
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len() + text.len() / MAX_LINE_OCTETS * 3);
    for line in text.split_inclusive('\n') {
        let (content, ending) = match line.strip_suffix(CRLF) {
            Some(content) => (content, CRLF),
            None => match line.strip_suffix('\n') {
                Some(content) => (content, "\n"),
                None => (line, ""),
            },
        };
        folded.push_str(&fold_line(content));
        folded.push_str(ending);
    }
    folded
}
