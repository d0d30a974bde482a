//! Signup Panel Component
//!
//! The mock registration form: email, password, terms checkbox. Validation
//! is client-only and ordered; the first failure becomes an error toast and
//! nothing else runs. A passing submission shows a success toast, then after
//! a short artificial delay fabricates an API key and swaps the form for the
//! result panel.
//!
//! At most one issuance is ever pending: resubmitting while one is in flight
//! cancels the earlier task before scheduling the next.

use dioxus::prelude::*;
use warmsite_core::{signup, SignupForm, Toast, KEY_ISSUE_DELAY};

use crate::clipboard;
use crate::context::use_toasts;

/// Signup panel; swaps to the key-result view once a key is issued.
#[component]
pub fn SignupPanel() -> Element {
    let toasts = use_toasts();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut accepted = use_signal(|| false);
    let mut api_key = use_signal(|| Option::<String>::None);
    let mut pending: Signal<Option<Task>> = use_signal(|| None);

    let on_submit = move |_: MouseEvent| {
        let form = SignupForm {
            email: email(),
            password: password(),
            accepted_terms: accepted(),
        };

        if let Err(err) = form.validate() {
            toasts.show(Toast::error(err.to_string()));
            return;
        }

        toasts.show(Toast::success("Account created! Generating your API key..."));

        // Cancel-on-resubmit: only the latest submission may issue a key.
        if let Some(task) = pending() {
            task.cancel();
        }

        let task = spawn(async move {
            let key = signup::issue_api_key(KEY_ISSUE_DELAY).await;
            api_key.set(Some(key.to_string()));
            pending.set(None);
        });
        pending.set(Some(task));
    };

    rsx! {
        div { class: "signup-panel",
            if let Some(key) = api_key() {
                SignupResult { api_key: key }
            } else {
                div { class: "signup-form",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@company.com",
                        }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            placeholder: "At least 8 characters",
                        }
                    }

                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: accepted(),
                            oninput: move |e| accepted.set(e.value() == "true"),
                        }
                        span {
                            "I agree to the terms of service and privacy policy"
                        }
                    }

                    button {
                        class: "signup-submit",
                        r#type: "button",
                        onclick: on_submit,
                        "Create account"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SignupResultProps {
    api_key: String,
}

/// Result panel shown in place of the form once a key exists.
#[component]
fn SignupResult(props: SignupResultProps) -> Element {
    let toasts = use_toasts();

    let key_text = props.api_key.clone();
    let on_copy = move |_| {
        clipboard::copy_text(&key_text);
        toasts.show(Toast::success("API key copied to clipboard"));
    };

    rsx! {
        div { class: "signup-result",
            h3 { class: "result-title", "You're in! 🎉" }
            p { class: "result-note",
                "Here is your API key. Use it as the "
                code { "api_key" }
                " argument in the quickstart."
            }

            div { class: "api-key-display",
                code { class: "api-key-text", "{props.api_key}" }
                button {
                    class: "copy-btn",
                    "aria-label": "Copy API key",
                    onclick: on_copy,

                    // Lucide copy icon
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        rect { x: "8", y: "8", width: "14", height: "14", rx: "2", ry: "2" }
                        path { d: "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" }
                    }
                }
            }

            p { class: "result-warning",
                "Keep this key private. It is shown once and cannot be recovered."
            }
        }
    }
}
