//! Record id generation.
//!
//! Ids look like `id_1767225600000_k3j9x0q2m`: a fixed prefix, the creation
//! time in unix milliseconds, and nine random base-36 characters. Nothing
//! checks a new id against existing ones; at interactive write rates a clash
//! would need two writes in the same millisecond drawing the same suffix.

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;

/// Prefix shared by every generated id.
pub const ID_PREFIX: &str = "id_";

const SUFFIX_LEN: usize = 9;
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fresh id stamped with the current time.
#[must_use]
pub fn generate_id() -> String {
    generate_id_at(Utc::now())
}

/// Generates an id stamped with `now`.
#[must_use]
pub fn generate_id_at(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .filter_map(|_| SUFFIX_ALPHABET.choose(&mut rng).copied().map(char::from))
        .collect();
    format!("{ID_PREFIX}{}_{suffix}", now.timestamp_millis())
}

#[cfg(test)]
pub(crate) fn is_generated_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix(ID_PREFIX) else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('_') else {
        return false;
    };
    !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_generated_id_format() {
        let id = generate_id();
        assert!(is_generated_id(&id), "unexpected id format: {id}");
    }

    #[test]
    fn test_id_embeds_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let id = generate_id_at(at);
        assert!(id.starts_with(&format!("id_{}_", at.timestamp_millis())));
    }

    #[test]
    fn test_ids_generated_together_differ() {
        let at = Utc::now();
        let ids: HashSet<String> = (0..100).map(|_| generate_id_at(at)).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_pattern_rejects_foreign_ids() {
        assert!(!is_generated_id("1"));
        assert!(!is_generated_id("id_abc_123456789"));
        assert!(!is_generated_id("id_123_SHORT"));
    }
}
