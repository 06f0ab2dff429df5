use chrono::{Local, TimeZone};
use dioxus::prelude::*;
use store::{NewLesson, Timestamp};

use crate::auth::use_session;

/// The lesson form's raw field values.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    /// `datetime-local` value, wall-clock time in the viewer's zone.
    pub start: String,
    pub duration: String,
    pub capacity: String,
}

impl Default for LessonDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start: String::new(),
            duration: NewLesson::DEFAULT_DURATION.to_string(),
            capacity: NewLesson::DEFAULT_CAPACITY.to_string(),
        }
    }
}

impl LessonDraft {
    /// Validate the fields and resolve the start time in `tz`.
    pub fn to_lesson<Tz: TimeZone>(&self, trainer_id: &str, tz: &Tz) -> Result<NewLesson, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let start = match self.start.parse::<Timestamp>() {
            Ok(Timestamp::Naive(naive)) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(Timestamp::from)
                .ok_or_else(|| format!("{} does not exist in the local time zone", self.start))?,
            Ok(zoned) => zoned,
            Err(_) => return Err("Start time is required".to_string()),
        };
        let duration = parse_positive(&self.duration, "Duration")?;
        let capacity = parse_positive(&self.capacity, "Capacity")?;

        Ok(NewLesson {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            start_time: start,
            duration,
            capacity,
            trainer_id: trainer_id.to_string(),
        })
    }
}

fn parse_positive(value: &str, field: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{field} must be a positive number")),
    }
}

/// Admin form for a fully specified lesson.
#[component]
pub fn LessonForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let mut draft = use_signal(LessonDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let trainer_id = session
            .read()
            .identity()
            .map(|identity| identity.id.clone())
            .unwrap_or_default();
        let lesson = match draft.read().to_lesson(&trainer_id, &Local) {
            Ok(lesson) => lesson,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let api = session.read().api();
        spawn(async move {
            match api.create_lesson(&lesson).await {
                Ok(()) => {
                    draft.set(LessonDraft::default());
                    on_success.call(());
                }
                Err(e) => tracing::error!("Error creating lesson: {}", e),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "lesson-form",
            onsubmit: handle_submit,
            h3 { "New Lesson" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            input {
                r#type: "text",
                placeholder: "Title",
                value: draft.read().title.clone(),
                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
            }
            textarea {
                placeholder: "Description",
                value: draft.read().description.clone(),
                oninput: move |evt: FormEvent| draft.write().description = evt.value(),
            }
            input {
                r#type: "datetime-local",
                value: draft.read().start.clone(),
                oninput: move |evt: FormEvent| draft.write().start = evt.value(),
            }
            label {
                "Duration (min)"
                input {
                    r#type: "number",
                    min: "1",
                    value: draft.read().duration.clone(),
                    oninput: move |evt: FormEvent| draft.write().duration = evt.value(),
                }
            }
            label {
                "Capacity"
                input {
                    r#type: "number",
                    min: "1",
                    value: draft.read().capacity.clone(),
                    oninput: move |evt: FormEvent| draft.write().capacity = evt.value(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving(),
                "Create Lesson"
            }
        }
    }
}
