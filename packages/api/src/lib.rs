//! # API crate — REST client and session for the lesson-booking app
//!
//! Every network call the web and desktop frontends make goes through this
//! crate. It knows the endpoint paths and the wire formats, and it owns the
//! authenticated session.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] for login/registration and [`AuthorizedClient`] for the bearer-authenticated lesson and booking endpoints |
//! | [`session`] | [`Session`]: login, signup, logout, `Authorization` header, restore on start-up |
//! | [`error`] | [`ApiError`]: transport failures, server-reported failures with their `msg`, malformed tokens |
//!
//! Mutations (`create_lesson`, `delete_lesson`, `book_lesson`, `cancel_booking`)
//! return `()`: callers reload the lists afterwards rather than patching local
//! state.

pub mod client;
pub mod error;
pub mod session;

pub use client::{ApiClient, AuthorizedClient};
pub use error::ApiError;
pub use session::Session;
