//! Member directory helpers.

use crate::{core::filter, models::Member};

/// Members whose name, description or focus areas contain `query`.
#[must_use]
pub fn search_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    filter::search(members, query, None)
}

/// Two-letter badge for a member name: first letters of the first two words,
/// or the first letter twice for a single word. Punctuation is ignored.
#[must_use]
pub fn initials(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let mut words = cleaned.split_whitespace();

    let Some(first) = words.next() else {
        return String::new();
    };
    let second = words.next().unwrap_or(first);

    first
        .chars()
        .take(1)
        .chain(second.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Caption under the directory listing.
#[must_use]
pub fn count_note(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} members")
}
