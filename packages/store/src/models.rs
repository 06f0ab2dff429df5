//! # Domain models for lessons, bookings and identities
//!
//! Defines the records the client exchanges with the lesson-booking REST API and
//! the identity it derives from a credential token. Lessons and bookings are
//! read-only snapshots: each fetch replaces the previous one and nothing here
//! is cached or synchronised incrementally.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Either `admin` or `student`. Determines the dashboard a user lands on (`/{role}`). |
//! | [`Identity`] | The `{id, role}` pair decoded from a token payload. Never fetched from the server. |
//! | [`Lesson`] | A bookable lesson as listed by `GET /api/lessons`. |
//! | [`NewLesson`] | The body posted to `POST /api/lessons`. |
//! | [`Booking`] | A booking as listed by `GET /api/bookings`, embedding a [`BookingLesson`] reference. |
//! | [`BookingStatus`] | `pending`, `confirmed`, `cancelled`; anything else maps to `Unknown`. |
//! | [`Timestamp`] | A lesson start time, either naive (local wall clock) or carrying an offset. |
//!
//! ## Timestamps
//!
//! The server emits naive ISO-8601 datetimes (`2025-05-01T10:00:00`), which are
//! interpreted as wall-clock time in whatever zone the caller resolves them in.
//! Values carrying an offset (`...Z`, `+02:00`) are converted instead. Outgoing
//! timestamps are always UTC with millisecond precision and a `Z` suffix.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type LessonId = i64;
pub type BookingId = i64;

/// Role carried in the token payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as seen by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque subject identifier, e.g. "5"
    pub id: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A lesson snapshot from `GET /api/lessons`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: Timestamp,
    /// Minutes
    pub duration: u32,
    pub capacity: u32,
    #[serde(default)]
    pub trainer_id: Option<serde_json::Value>,
}

/// Body of `POST /api/lessons`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewLesson {
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub duration: u32,
    pub capacity: u32,
    pub trainer_id: String,
}

impl NewLesson {
    pub const DEFAULT_DURATION: u32 = 60;
    pub const DEFAULT_CAPACITY: u32 = 10;

    /// A lesson with the default duration and capacity and no description.
    pub fn new(title: impl Into<String>, start_time: Timestamp, trainer_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            start_time,
            duration: Self::DEFAULT_DURATION,
            capacity: Self::DEFAULT_CAPACITY,
            trainer_id: trainer_id.into(),
        }
    }
}

/// Lesson reference embedded in a [`Booking`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingLesson {
    pub id: LessonId,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking snapshot from `GET /api/bookings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub lesson: BookingLesson,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

/// Lesson start time as sent over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// No offset: a wall-clock time in the viewer's zone.
    Naive(NaiveDateTime),
    /// Explicit offset: an absolute instant.
    Zoned(DateTime<FixedOffset>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {0:?}")]
pub struct TimestampParseError(String);

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    /// Resolve to a datetime in `tz`. Naive values that fall in a DST gap resolve to `None`.
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            Timestamp::Naive(naive) => tz.from_local_datetime(naive).earliest(),
            Timestamp::Zoned(instant) => Some(instant.with_timezone(tz)),
        }
    }

    /// UTC, millisecond precision, `Z` suffix.
    pub fn to_utc_string(&self) -> Option<String> {
        let utc = self.in_zone(&Utc)?;
        Some(utc.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp::Zoned(value.fixed_offset())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
            return Ok(Timestamp::Zoned(zoned));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .map(Timestamp::Naive)
            .ok_or_else(|| TimestampParseError(s.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S")),
            Timestamp::Zoned(instant) => {
                let utc = instant.with_timezone(&Utc);
                f.write_str(&utc.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
