use dioxus::prelude::*;
use store::{Identity, Page};
use ui::{use_guard, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    if !use_guard::<Route>(Page::Login) {
        return rsx! {};
    }

    rsx! {
        div {
            class: "auth-page",
            LoginForm {
                on_success: move |identity: Identity| {
                    nav.replace(Route::from(Page::home_of(identity.role)));
                },
                on_signup: move |_| {
                    nav.push(Route::Signup {});
                },
            }
        }
    }
}
