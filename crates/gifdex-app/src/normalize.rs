// Copyright 2026 the gifdex authors
// Licensed under the Apache License, Version 2.0

//! Catalog keys are derived from free-text queries by a fixed pipeline:
//! lowercase, spaces to underscores, NFD decomposition with combining marks
//! dropped, then a `[a-z0-9_]` filter. The order matters: decomposition runs
//! after lowercasing so accented capitals still decompose, and before the
//! final filter so leftover marks and stray symbols are removed together.
//! Consecutive underscores are never collapsed; catalog naming owns that.

use unicode_normalization::UnicodeNormalization;

/// Derive the lookup key for a raw query. Total: every input is accepted,
/// the worst case is an empty key.
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase()
        .replace(' ', "_")
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(is_key_char)
        .collect()
}

/// Human-facing label shown next to a resolved result: first character
/// uppercased, the rest lowercased, computed from the query as typed.
pub fn display_label(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The Combining Diacritical Marks block, which is what NFD leaves behind
/// for the latin-script names the catalog carries.
fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

fn is_key_char(ch: &char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_')
}
