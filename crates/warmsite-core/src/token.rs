//! Mock API keys for the signup flow
//!
//! The page fabricates a key entirely client-side and presents it as if it
//! were server-issued. Keys are `wa_sk_` followed by 32 random alphanumeric
//! characters, exist only in UI state, and are lost when the window closes.

use std::fmt;

use rand::{distr::Alphanumeric, Rng};

/// Prefix of every fabricated key
pub const KEY_PREFIX: &str = "wa_sk_";

/// Number of random alphanumeric characters after the prefix
pub const KEY_SUFFIX_LEN: usize = 32;

/// A client-fabricated API key.
///
/// Invariant: the inner string always matches `^wa_sk_[A-Za-z0-9]{32}$`.
/// The only way to construct one is [`ApiKey::generate`], which upholds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Fabricate a new key from the thread-local RNG.
    pub fn generate() -> Self {
        let mut key = String::with_capacity(KEY_PREFIX.len() + KEY_SUFFIX_LEN);
        key.push_str(KEY_PREFIX);
        key.extend(
            rand::rng()
                .sample_iter(&Alphanumeric)
                .take(KEY_SUFFIX_LEN)
                .map(char::from),
        );
        Self(key)
    }

    /// Borrow the key text (e.g. for clipboard writes).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a string has the fabricated-key shape.
    pub fn is_well_formed(s: &str) -> bool {
        match s.strip_prefix(KEY_PREFIX) {
            Some(suffix) => {
                suffix.len() == KEY_SUFFIX_LEN
                    && suffix.chars().all(|c| c.is_ascii_alphanumeric())
            }
            None => false,
        }
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_generated_key_shape() {
        let key = ApiKey::generate();
        assert!(key.as_str().starts_with(KEY_PREFIX));
        assert_eq!(key.as_str().len(), KEY_PREFIX.len() + KEY_SUFFIX_LEN);
        assert!(ApiKey::is_well_formed(key.as_str()));
    }

    #[test]
    fn test_generated_keys_differ() {
        let a = ApiKey::generate();
        let b = ApiKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_well_formed_rejects_bad_shapes() {
        assert!(!ApiKey::is_well_formed(""));
        assert!(!ApiKey::is_well_formed("wa_sk_"));
        assert!(!ApiKey::is_well_formed("sk_wa_AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"));
        // 31 characters
        assert!(!ApiKey::is_well_formed(&format!(
            "{}{}",
            KEY_PREFIX,
            "a".repeat(KEY_SUFFIX_LEN - 1)
        )));
        // 33 characters
        assert!(!ApiKey::is_well_formed(&format!(
            "{}{}",
            KEY_PREFIX,
            "a".repeat(KEY_SUFFIX_LEN + 1)
        )));
        // non-alphanumeric suffix
        assert!(!ApiKey::is_well_formed(&format!(
            "{}{}!",
            KEY_PREFIX,
            "a".repeat(KEY_SUFFIX_LEN - 1)
        )));
    }

    #[test]
    fn test_display_matches_as_str() {
        let key = ApiKey::generate();
        assert_eq!(format!("{}", key), key.as_str());
    }

    proptest! {
        #[test]
        fn prop_every_generated_key_is_well_formed(_seed in 0u32..64) {
            let key = ApiKey::generate();
            prop_assert!(ApiKey::is_well_formed(key.as_str()));
        }
    }
}
