//! # Weekly schedule grid
//!
//! [`build`] turns the flat lesson and booking lists returned by the API into
//! the day × hour render model used by the schedule table:
//!
//! 1. Lessons are bucketed by the `(weekday, hour)` of their start time in the
//!    caller's time zone. A bucket keeps fetch order.
//! 2. Every booking that is not cancelled is indexed by lesson id. If several
//!    share a lesson, the last one wins.
//! 3. One [`GridRow`] is produced per hour in `start_hour..=end_hour`, each with
//!    seven cells, Sunday first.
//!
//! Lessons that land outside the displayed hours, or whose start cannot be
//! placed in the zone, do not appear in any cell. Their ids are collected in
//! [`ScheduleGrid::unplaced`] so the view can say so.
//!
//! The builder is pure: no I/O, inputs are only borrowed, and the output depends
//! only on the inputs and the zone.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Days, TimeZone, Timelike};

use crate::models::{Booking, BookingId, Lesson, LessonId};

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DEFAULT_START_HOUR: u32 = 6;
pub const DEFAULT_END_HOUR: u32 = 22;

/// A lesson placed in a cell, with the student's booking if any.
#[derive(Clone, Debug, PartialEq)]
pub struct GridEntry {
    pub lesson: Lesson,
    booking_id: Option<BookingId>,
}

impl GridEntry {
    pub fn booked(&self) -> bool {
        self.booking_id.is_some()
    }

    /// Id to cancel when the entry is booked.
    pub fn booking_id(&self) -> Option<BookingId> {
        self.booking_id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridCell {
    /// 0 = Sunday
    pub weekday: u32,
    pub hour: u32,
    pub entries: Vec<GridEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
    pub hour: u32,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    pub fn label(&self) -> String {
        hour_label(self.hour)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleGrid {
    pub start_hour: u32,
    pub end_hour: u32,
    pub rows: Vec<GridRow>,
    /// Lessons not shown in any cell.
    pub unplaced: Vec<LessonId>,
}

impl ScheduleGrid {
    pub fn cell(&self, weekday: u32, hour: u32) -> Option<&GridCell> {
        let row = self.rows.iter().find(|row| row.hour == hour)?;
        row.cells.get(weekday as usize)
    }

    /// Locate a lesson's entry along with its `(weekday, hour)`.
    pub fn find(&self, lesson_id: LessonId) -> Option<(u32, u32, &GridEntry)> {
        self.rows.iter().flat_map(|row| &row.cells).find_map(|cell| {
            cell.entries
                .iter()
                .find(|entry| entry.lesson.id == lesson_id)
                .map(|entry| (cell.weekday, cell.hour, entry))
        })
    }

    pub fn lesson_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .map(|cell| cell.entries.len())
            .sum()
    }
}

/// `"{hour}:00"`
pub fn hour_label(hour: u32) -> String {
    format!("{hour}:00")
}

/// Build the weekly grid for `lessons` annotated with the student's `bookings`.
pub fn build<Tz: TimeZone>(
    lessons: &[Lesson],
    bookings: &[Booking],
    start_hour: u32,
    end_hour: u32,
    tz: &Tz,
) -> ScheduleGrid {
    let mut buckets: HashMap<(u32, u32), Vec<&Lesson>> = HashMap::new();
    let mut unplaced = Vec::new();
    for lesson in lessons {
        match lesson.start_time.in_zone(tz) {
            Some(start) if (start_hour..=end_hour).contains(&start.hour()) => {
                let weekday = start.weekday().num_days_from_sunday();
                buckets.entry((weekday, start.hour())).or_default().push(lesson);
            }
            _ => unplaced.push(lesson.id),
        }
    }

    let mut booking_by_lesson: HashMap<LessonId, BookingId> = HashMap::new();
    for booking in bookings.iter().filter(|booking| !booking.is_cancelled()) {
        booking_by_lesson.insert(booking.lesson.id, booking.id);
    }

    let rows = (start_hour..=end_hour)
        .map(|hour| GridRow {
            hour,
            cells: (0..7)
                .map(|weekday| GridCell {
                    weekday,
                    hour,
                    entries: buckets
                        .get(&(weekday, hour))
                        .map(|bucket| {
                            bucket
                                .iter()
                                .map(|lesson| GridEntry {
                                    lesson: (*lesson).clone(),
                                    booking_id: booking_by_lesson.get(&lesson.id).copied(),
                                })
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    if !unplaced.is_empty() {
        tracing::debug!(count = unplaced.len(), "lessons outside the displayed hours");
    }

    ScheduleGrid {
        start_hour,
        end_hour,
        rows,
        unplaced,
    }
}

/// Start of the next `weekday` (0 = Sunday, today included) at `hour:00`.
///
/// Returns `None` for an out-of-range weekday or hour, or when that wall-clock
/// time does not exist in the zone.
pub fn slot_start<Tz: TimeZone>(now: &DateTime<Tz>, weekday: u32, hour: u32) -> Option<DateTime<Tz>> {
    if weekday > 6 || hour > 23 {
        return None;
    }
    let today = now.weekday().num_days_from_sunday();
    let diff = (7 + weekday - today) % 7;
    let date = now.date_naive().checked_add_days(Days::new(diff.into()))?;
    let naive = date.and_hms_opt(hour, 0, 0)?;
    now.timezone().from_local_datetime(&naive).earliest()
}
