//! The weekly lesson table shared by both dashboards.
//!
//! Lessons are fetched on mount and whenever `revision` moves. A mutation
//! takes the table's [`ActionLock`] and holds it until it has been sent and
//! the lists have been reloaded, so every action button stays disabled
//! meanwhile. Reloads triggered from outside never touch the lock. Failures
//! are logged and the previous snapshot stays on screen.

use std::fmt;

use api::{ApiError, AuthorizedClient};
use chrono::Local;
use dioxus::prelude::*;
use store::schedule::{self, hour_label, WEEKDAY_LABELS};
use store::{Booking, BookingId, GridCell, GridEntry, Lesson, LessonId, NewLesson, Timestamp};

use crate::auth::{use_client_config, use_session};
use crate::icons::{FaMinus, FaPlus};
use crate::modal::ModalOverlay;
use crate::Icon;

/// A change requested from the table.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Create(NewLesson),
    Delete(LessonId),
    Book(LessonId),
    Cancel(BookingId),
}

impl Mutation {
    async fn send(&self, api: &AuthorizedClient) -> Result<(), ApiError> {
        match self {
            Mutation::Create(lesson) => api.create_lesson(lesson).await,
            Mutation::Delete(id) => api.delete_lesson(*id).await,
            Mutation::Book(id) => api.book_lesson(*id).await,
            Mutation::Cancel(id) => api.cancel_booking(*id).await,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Create(lesson) => write!(f, "creating lesson {:?}", lesson.title),
            Mutation::Delete(id) => write!(f, "deleting lesson {id}"),
            Mutation::Book(id) => write!(f, "booking lesson {id}"),
            Mutation::Cancel(id) => write!(f, "cancelling booking {id}"),
        }
    }
}

/// One table mutation at a time.
///
/// Only the task that acquired the lock releases it, after its own follow-up
/// reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionLock {
    held: bool,
}

impl ActionLock {
    /// `false` when another mutation is still in flight.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Replace the snapshots with fresh lists. A failed fetch keeps the old one.
async fn reload(
    api: AuthorizedClient,
    with_bookings: bool,
    mut lessons: Signal<Vec<Lesson>>,
    mut bookings: Signal<Vec<Booking>>,
) {
    match api.list_lessons().await {
        Ok(list) => lessons.set(list),
        Err(e) => tracing::error!("Lessons fetch error: {}", e),
    }
    if with_bookings {
        match api.list_bookings().await {
            Ok(list) => bookings.set(list),
            Err(e) => tracing::error!("Bookings fetch error: {}", e),
        }
    }
}

/// `on_change` fires after one of the table's own mutations has landed and
/// the table has reloaded.
#[component]
pub fn WeeklySchedule(is_admin: bool, revision: Signal<u32>, on_change: EventHandler<()>) -> Element {
    let session = use_session();
    let config = use_client_config();
    let lessons = use_signal(Vec::<Lesson>::new);
    let bookings = use_signal(Vec::<Booking>::new);
    let lock = use_signal(ActionLock::default);
    let mut quick_slot = use_signal(|| None::<(u32, u32)>);

    let _ = use_resource(move || {
        let _ = revision();
        let api = session.peek().api();
        async move {
            reload(api, !is_admin, lessons, bookings).await;
        }
    });

    let apply = move |mutation: Mutation| {
        let mut lock = lock;
        if !lock.write().acquire() {
            return;
        }
        let api = session.peek().api();
        spawn(async move {
            match mutation.send(&api).await {
                Ok(()) => {
                    reload(api, !is_admin, lessons, bookings).await;
                    on_change.call(());
                }
                Err(e) => tracing::error!("Error {}: {}", mutation, e),
            }
            lock.write().release();
        });
    };

    let create_at = move |(weekday, hour): (u32, u32), title: String| {
        let mut quick_slot = quick_slot;
        quick_slot.set(None);
        let Some(start) = schedule::slot_start(&Local::now(), weekday, hour) else {
            tracing::error!("No local time for weekday {} at {}", weekday, hour_label(hour));
            return;
        };
        let Some(trainer_id) = session
            .peek()
            .identity()
            .filter(|identity| identity.is_admin())
            .map(|identity| identity.id.clone())
        else {
            tracing::warn!("Only admins can add lessons");
            return;
        };
        apply(Mutation::Create(NewLesson::new(title, Timestamp::from(start), trainer_id)));
    };

    let busy = lock.read().is_held();
    let grid = schedule::build(
        &lessons.read(),
        &bookings.read(),
        config.schedule.start_hour,
        config.schedule.end_hour,
        &Local,
    );

    rsx! {
        div {
            class: "schedule",
            table {
                class: "schedule-table",
                thead {
                    tr {
                        th { "Time" }
                        for label in WEEKDAY_LABELS {
                            th { key: "{label}", "{label}" }
                        }
                    }
                }
                tbody {
                    for row in grid.rows.iter() {
                        tr {
                            key: "{row.hour}",
                            td { class: "hour-label", "{row.label()}" }
                            for cell in row.cells.iter() {
                                ScheduleCell {
                                    key: "{cell.weekday}-{cell.hour}",
                                    cell: cell.clone(),
                                    is_admin,
                                    busy,
                                    on_action: move |mutation: Mutation| apply(mutation),
                                    on_add: move |slot: (u32, u32)| quick_slot.set(Some(slot)),
                                }
                            }
                        }
                    }
                }
            }
            if !grid.unplaced.is_empty() {
                p {
                    class: "schedule-note",
                    "{grid.unplaced.len()} lesson(s) fall outside the displayed hours and are not shown."
                }
            }
        }
        if let Some(slot) = quick_slot() {
            QuickCreateDialog {
                weekday: slot.0,
                hour: slot.1,
                on_create: move |title: String| create_at(slot, title),
                on_cancel: move |_| quick_slot.set(None),
            }
        }
    }
}

#[component]
fn ScheduleCell(
    cell: GridCell,
    is_admin: bool,
    busy: bool,
    on_action: EventHandler<Mutation>,
    on_add: EventHandler<(u32, u32)>,
) -> Element {
    let slot = (cell.weekday, cell.hour);

    rsx! {
        td {
            class: "schedule-cell",
            for entry in cell.entries.iter() {
                LessonEntry {
                    key: "{entry.lesson.id}",
                    entry: entry.clone(),
                    is_admin,
                    busy,
                    on_action,
                }
            }
            if is_admin {
                button {
                    class: "icon-btn add-btn",
                    title: "Add lesson",
                    disabled: busy,
                    onclick: move |_| on_add.call(slot),
                    Icon { icon: FaPlus, width: 10, height: 10 }
                }
            }
        }
    }
}

#[component]
fn LessonEntry(entry: GridEntry, is_admin: bool, busy: bool, on_action: EventHandler<Mutation>) -> Element {
    let lesson_id = entry.lesson.id;
    let class = if entry.booked() { "lesson booked" } else { "lesson open" };
    let student_action = if is_admin {
        None
    } else {
        Some(match entry.booking_id() {
            Some(booking_id) => ("Pull Out", Mutation::Cancel(booking_id)),
            None => ("Book", Mutation::Book(lesson_id)),
        })
    };

    rsx! {
        div {
            class: "{class}",
            span { class: "lesson-title", "{entry.lesson.title}" }
            if is_admin {
                button {
                    class: "icon-btn remove-btn",
                    title: "Delete lesson",
                    disabled: busy,
                    onclick: move |_| on_action.call(Mutation::Delete(lesson_id)),
                    Icon { icon: FaMinus, width: 10, height: 10 }
                }
            }
            if let Some((label, mutation)) = student_action {
                button {
                    class: "btn btn-small",
                    disabled: busy,
                    onclick: move |_| on_action.call(mutation.clone()),
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn QuickCreateDialog(
    weekday: u32,
    hour: u32,
    on_create: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let day = WEEKDAY_LABELS.get(weekday as usize).copied().unwrap_or_default();
    let when = format!("{day} {}", hour_label(hour));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if !t.is_empty() {
            on_create.call(t);
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "quick-create",
                onsubmit: handle_submit,
                h3 { "New lesson, {when}" }
                input {
                    r#type: "text",
                    placeholder: "Class title?",
                    autofocus: true,
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                div {
                    class: "form-actions",
                    button { class: "btn btn-primary", r#type: "submit", "Create" }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_admits_one_mutation_at_a_time() {
        let mut lock = ActionLock::default();
        assert!(!lock.is_held());
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.is_held());

        lock.release();
        assert!(!lock.is_held());
        assert!(lock.acquire());
    }

    #[test]
    fn test_mutation_log_labels() {
        assert_eq!(Mutation::Book(42).to_string(), "booking lesson 42");
        assert_eq!(Mutation::Cancel(7).to_string(), "cancelling booking 7");
        assert_eq!(Mutation::Delete(3).to_string(), "deleting lesson 3");
    }
}
