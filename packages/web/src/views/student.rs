use dioxus::prelude::*;
use store::Page;
use ui::use_guard;
use ui::views::StudentDashboardView;

use crate::Route;

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
