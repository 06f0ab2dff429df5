use api::ApiError;
use dioxus::prelude::*;
use store::Identity;

use crate::auth::use_session;

const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// The server's `msg` when it sent one, a generic line otherwise.
pub fn login_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(LOGIN_FAILED).to_string()
}

/// Email/password login.
///
/// On success the session signal is updated (which re-runs the route guards)
/// and `on_success` receives the decoded identity.
#[component]
pub fn LoginForm(on_success: EventHandler<Identity>, on_signup: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        spawn(async move {
            let mut next = session();
            match next.login(&email(), &password()).await {
                Ok(identity) => {
                    loading.set(false);
                    session.set(next);
                    on_success.call(identity);
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some(login_error_message(&e)));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h2 { "Log In" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            form {
                class: "auth-form",
                onsubmit: handle_submit,
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
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Log In" }
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_signup.call(()),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
