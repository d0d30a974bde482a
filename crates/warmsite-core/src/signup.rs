//! Mock signup flow
//!
//! Client-only validation of the signup form plus the delayed fabrication of
//! an API key. There is no server round-trip anywhere in this module: the
//! delay exists purely so the page can show its "generating" state, and the
//! key is fabricated locally.
//!
//! Validation is ordered and short-circuits: the first failing check decides
//! the error and nothing after it runs.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::error::SignupError;
use crate::token::ApiKey;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Artificial delay before a key is "issued"
pub const KEY_ISSUE_DELAY: Duration = Duration::from_millis(1000);

/// Address pattern: something without whitespace or `@`, an `@`, a domain,
/// a dot, a TLD. Deliberately loose; this is cosmetic validation, not RFC
/// parsing.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Check an email address against the page's loose pattern.
pub fn email_is_valid(email: &str) -> bool {
    email_re().is_match(email)
}

/// One signup attempt, read from the form fields at submit time.
///
/// Values are transient: nothing here is stored past the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub accepted_terms: bool,
}

impl SignupForm {
    /// Validate the attempt. First failure wins:
    ///
    /// 1. email empty or malformed
    /// 2. password shorter than [`MIN_PASSWORD_LEN`]
    /// 3. terms not accepted
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.email.is_empty() || !email_is_valid(&self.email) {
            return Err(SignupError::InvalidEmail);
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        if !self.accepted_terms {
            return Err(SignupError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Fabricate an API key after `delay`.
///
/// This is the explicit form of the page's "registering..." pause. Callers
/// own the task: dropping or cancelling the future before the delay elapses
/// means no key is ever produced, which is how the UI guarantees at most one
/// pending issuance.
pub async fn issue_api_key(delay: Duration) -> ApiKey {
    tokio::time::sleep(delay).await;
    let key = ApiKey::generate();
    tracing::debug!(key = %key, "fabricated mock api key");
    key
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_empty_email_rejected() {
        let form = SignupForm {
            email: String::new(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let form = SignupForm {
            email: "ada.example.com".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_email_without_dot_after_at_rejected() {
        let form = SignupForm {
            email: "ada@example".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_email_with_whitespace_rejected() {
        let form = SignupForm {
            email: "ada lovelace@example.com".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_email_error_wins_over_password_and_terms() {
        // Everything is wrong; the email check decides the error.
        let form = SignupForm {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            accepted_terms: false,
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_short_password_rejected() {
        let form = SignupForm {
            password: "seven77".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordTooShort));
    }

    #[test]
    fn test_password_boundary() {
        let at_minimum = SignupForm {
            password: "8".repeat(MIN_PASSWORD_LEN),
            ..valid_form()
        };
        assert_eq!(at_minimum.validate(), Ok(()));

        let below_minimum = SignupForm {
            password: "7".repeat(MIN_PASSWORD_LEN - 1),
            ..valid_form()
        };
        assert_eq!(below_minimum.validate(), Err(SignupError::PasswordTooShort));
    }

    #[test]
    fn test_password_error_wins_over_terms() {
        let form = SignupForm {
            password: "short".to_string(),
            accepted_terms: false,
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordTooShort));
    }

    #[test]
    fn test_unchecked_terms_rejected() {
        let form = SignupForm {
            accepted_terms: false,
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(SignupError::TermsNotAccepted));
    }

    #[tokio::test(start_paused = true)]
    async fn test_issue_waits_for_delay() {
        let issuance = tokio::spawn(issue_api_key(KEY_ISSUE_DELAY));

        // Just short of the delay: still pending.
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(!issuance.is_finished());

        // Past the delay: resolved with a well-formed key.
        tokio::time::sleep(Duration::from_millis(2)).await;
        let key = issuance.await.expect("issuance task completed");
        assert!(crate::ApiKey::is_well_formed(key.as_str()));
    }

    proptest! {
        // Whitespace anywhere in the address always fails the pattern.
        #[test]
        fn prop_whitespace_never_validates(
            local in "[a-z]{1,8}",
            domain in "[a-z]{1,8}",
            idx in 0usize..16,
        ) {
            let mut email = format!("{local}@{domain}.com");
            let at = idx.min(email.len());
            email.insert(at, ' ');
            prop_assert!(!email_is_valid(&email));
        }

        // No '@' means no match, whatever else the string contains.
        #[test]
        fn prop_missing_at_never_validates(s in "[a-z0-9.]{0,24}") {
            prop_assert!(!email_is_valid(&s));
        }
    }
}
