//! Error types for the Warm Agent site

use thiserror::Error;

/// Signup form rejection reasons.
///
/// The `Display` string of each variant is exactly the message shown to the
/// user in the error toast, so the UI never re-words validation failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    /// Email was empty or did not match the address pattern
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Password was empty or shorter than the minimum length
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    /// Terms-of-service checkbox was left unchecked
    #[error("Please accept the terms of service and privacy policy")]
    TermsNotAccepted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_user_facing() {
        assert_eq!(
            format!("{}", SignupError::InvalidEmail),
            "Please enter a valid email address"
        );
        assert_eq!(
            format!("{}", SignupError::PasswordTooShort),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            format!("{}", SignupError::TermsNotAccepted),
            "Please accept the terms of service and privacy policy"
        );
    }
}
