//! This crate contains all shared UI for the workspace.
//!
//! Platform crates wrap their router in [`AuthProvider`] and map the views'
//! callbacks (`on_success`, `on_logout`, ...) onto their own routes.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const LESSONS_CSS: Asset = asset!("/assets/lessons.css");

mod auth;
pub use auth::{use_client_config, use_guard, use_identity, use_session, AuthProvider, LogoutButton};

mod settings;
pub use settings::{load_config, DEFAULT_API_URL};

mod tokens;
pub use tokens::make_token_store;

mod modal;
pub use modal::ModalOverlay;

mod login_form;
pub use login_form::{login_error_message, LoginForm};

mod signup_form;
pub use signup_form::{signup_error_message, SignupForm};

mod lesson_form;
pub use lesson_form::{LessonDraft, LessonForm};

mod booking_list;
pub use booking_list::BookingList;

mod weekly_schedule;
pub use weekly_schedule::{Mutation, WeeklySchedule};
