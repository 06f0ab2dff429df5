use dioxus::prelude::*;
use store::{Identity, Page};
use ui::{use_guard, SignupForm};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    if !use_guard::<Route>(Page::Signup) {
        return rsx! {};
    }

    rsx! {
        div {
            class: "auth-page",
            SignupForm {
                on_success: move |identity: Identity| {
                    nav.replace(Route::from(Page::home_of(identity.role)));
                },
                on_back: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
