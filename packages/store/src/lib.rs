//! # Store crate — client-side state and pure logic
//!
//! Everything the lesson-booking client knows without talking to the network:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Lessons, bookings, roles, identities and the wire timestamp format |
//! | [`token`] | Decoding `{sub, role}` from a credential token payload |
//! | [`schedule`] | The weekly day × hour grid builder |
//! | [`routing`] | Role-based route guard |
//! | [`config`] | `lessons.toml` client configuration |
//! | [`tokens`] | The durable token slot and its platform backends |

pub mod config;
pub mod models;
pub mod routing;
pub mod schedule;
pub mod token;
pub mod tokens;

mod file_store;
pub use file_store::FileTokenStore;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{ClientConfig, ConfigError};
pub use models::{
    Booking, BookingId, BookingLesson, BookingStatus, Identity, Lesson, LessonId, NewLesson, Role,
    Timestamp,
};
pub use routing::{Outcome, Page};
pub use schedule::{GridCell, GridEntry, GridRow, ScheduleGrid};
pub use token::{decode_identity, TokenError};
pub use tokens::{TokenStore, TOKEN_KEY};
