//! Routed pages. Each one runs the role guard before rendering its shared view.

use dioxus::prelude::*;
use store::{Identity, Page};
use ui::views::{AdminDashboardView, StudentDashboardView};
use ui::{use_guard, LoginForm, SignupForm};

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

#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();
    if !use_guard::<Route>(Page::Admin) {
        return rsx! {};
    }

    rsx! {
        AdminDashboardView {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn Student() -> Element {
    let nav = use_navigator();
    if !use_guard::<Route>(Page::Student) {
        return rsx! {};
    }

    rsx! {
        StudentDashboardView {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
