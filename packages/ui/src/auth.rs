//! Session context and hooks for the UI.

use api::{ApiClient, Session};
use dioxus::prelude::*;
use store::routing::{self, Outcome, Page};
use store::{ClientConfig, Identity};

use crate::icons::FaRightFromBracket;
use crate::tokens::make_token_store;
use crate::Icon;

/// The app-wide session.
/// Writing to it (login, logout) re-runs every route guard.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Who is logged in right now, if anyone.
pub fn use_identity() -> Option<Identity> {
    use_session().read().identity().cloned()
}

/// Role guard for `page`: `true` when it may render. Otherwise the router has
/// been sent to the redirect target, mapped onto the platform's route type.
pub fn use_guard<R>(page: Page) -> bool
where
    R: Routable + From<Page>,
{
    let identity = use_identity();
    let nav = use_navigator();
    match routing::resolve(page, identity.as_ref()) {
        Outcome::Render(_) => true,
        Outcome::Redirect(target) => {
            nav.replace(R::from(target));
            false
        }
    }
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the session and the client configuration.
/// The previous run's token is picked up once, on mount.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let config = use_context_provider(move || config);
    let session = use_signal(move || {
        let client = ApiClient::new(config.api.base_url.clone());
        Session::restore(client, make_token_store())
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Clears the session, then lets the caller decide where to go.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Log Out".to_string())] label: String,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "btn btn-outline logout-btn",
            onclick: move |_| {
                session.write().logout();
                on_logout.call(());
            },
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
