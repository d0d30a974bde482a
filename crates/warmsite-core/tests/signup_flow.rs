//! End-to-end mock signup flow
//!
//! Exercises validate → delayed issuance → key display the way the signup
//! panel drives it, including the cancel-on-resubmit behavior, under a
//! paused tokio clock.

use std::time::Duration;

use warmsite_core::{signup, ApiKey, SignupError, SignupForm, KEY_ISSUE_DELAY};

fn valid_form() -> SignupForm {
    SignupForm {
        email: "grace@hopper.dev".to_string(),
        password: "eniac1946".to_string(),
        accepted_terms: true,
    }
}

#[tokio::test(start_paused = true)]
async fn happy_path_issues_exactly_one_well_formed_key() {
    let form = valid_form();
    assert!(form.validate().is_ok());

    let key = signup::issue_api_key(KEY_ISSUE_DELAY).await;
    assert!(ApiKey::is_well_formed(key.as_str()));

    // A second attempt issues a different key; nothing is persisted between
    // attempts.
    let second = signup::issue_api_key(KEY_ISSUE_DELAY).await;
    assert_ne!(key, second);
}

#[tokio::test(start_paused = true)]
async fn rejected_form_never_reaches_issuance() {
    let form = SignupForm {
        accepted_terms: false,
        ..valid_form()
    };

    // The panel only schedules issuance after validate() passes, so a
    // rejection means the delay never starts.
    assert_eq!(form.validate(), Err(SignupError::TermsNotAccepted));
}

#[tokio::test(start_paused = true)]
async fn cancelled_issuance_yields_no_key() {
    let pending = tokio::spawn(signup::issue_api_key(KEY_ISSUE_DELAY));

    // Resubmission happens halfway through the delay: the panel cancels the
    // pending task before scheduling a new one.
    tokio::time::sleep(Duration::from_millis(500)).await;
    pending.abort();

    let outcome = pending.await;
    assert!(outcome.is_err());
    assert!(outcome.unwrap_err().is_cancelled());

    // The replacement issuance still completes normally.
    let key = signup::issue_api_key(KEY_ISSUE_DELAY).await;
    assert!(ApiKey::is_well_formed(key.as_str()));
}

#[tokio::test(start_paused = true)]
async fn issuance_resolves_only_after_the_full_delay() {
    let pending = tokio::spawn(signup::issue_api_key(KEY_ISSUE_DELAY));

    tokio::time::sleep(KEY_ISSUE_DELAY - Duration::from_millis(1)).await;
    assert!(!pending.is_finished());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(pending.is_finished());
    let key = pending.await.expect("issuance completed");
    assert!(ApiKey::is_well_formed(key.as_str()));
}
