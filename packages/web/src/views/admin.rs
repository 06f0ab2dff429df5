use dioxus::prelude::*;
use store::Page;
use ui::use_guard;
use ui::views::AdminDashboardView;

use crate::Route;

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
