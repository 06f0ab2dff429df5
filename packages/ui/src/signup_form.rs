use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;
use store::Identity;

use crate::auth::use_session;

const SIGNUP_FAILED: &str = "Sign up failed. Please try again.";
const SIGNUP_DONE: &str = "Account created successfully!";

/// How long the success line stays up before moving on.
const SUCCESS_DELAY: Duration = Duration::from_secs(1);

/// The server's `msg`, else the error's own text, else a generic line.
pub fn signup_error_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    let text = err.to_string();
    if text.is_empty() {
        SIGNUP_FAILED.to_string()
    } else {
        text
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Registration followed by an automatic login.
///
/// The new session is only published once the success line has been shown,
/// then `on_success` receives the identity.
#[component]
pub fn SignupForm(on_success: EventHandler<Identity>, on_back: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut wants_admin_role = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<&'static str>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        success.set(None);
        spawn(async move {
            let mut next = session();
            let result = next
                .signup(&name(), &email(), &password(), wants_admin_role())
                .await;
            match result {
                Ok(identity) => {
                    success.set(Some(SIGNUP_DONE));
                    sleep(SUCCESS_DELAY).await;
                    loading.set(false);
                    session.set(next);
                    on_success.call(identity);
                }
                Err(e) => {
                    tracing::error!("Sign up failed: {}", e);
                    error.set(Some(signup_error_message(&e)));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h2 { "Sign Up" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            if let Some(message) = success() {
                p { class: "form-success", "{message}" }
            }
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Name",
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: wants_admin_role(),
                        onchange: move |evt: FormEvent| wants_admin_role.set(evt.checked()),
                    }
                    "Register as admin"
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        "Sign Up"
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_back.call(()),
                        "Back to Login"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_first() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(signup_error_message(&err), "Email already registered");
    }

    #[test]
    fn test_error_text_without_message() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(signup_error_message(&err), "server returned 500: no message");
    }
}
