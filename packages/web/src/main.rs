use dioxus::prelude::*;

use store::Page;
use ui::use_guard;
use views::{Admin, Login, Signup, Student};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/admin")]
    Admin {},
    #[route("/student")]
    Student {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Signup => Route::Signup {},
            Page::Admin => Route::Admin {},
            Page::Student => Route::Student {},
            Page::Unknown => Route::Root {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::LESSONS_CSS }
        ui::AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// `/` goes to the login page or to the role's dashboard.
#[component]
fn Root() -> Element {
    use_guard::<Route>(Page::Unknown);
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No page at /{}", segments.join("/"));
    use_guard::<Route>(Page::Unknown);
    rsx! {}
}
