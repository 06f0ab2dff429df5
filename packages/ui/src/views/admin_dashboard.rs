use dioxus::prelude::*;

use crate::{LessonForm, LogoutButton, WeeklySchedule};

/// Lesson management: the full form plus the editable weekly table.
#[component]
pub fn AdminDashboardView(on_logout: EventHandler<()>) -> Element {
    let mut revision = use_signal(|| 0u32);

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "Admin Dashboard" }
                LogoutButton { on_logout }
            }
            LessonForm { on_success: move |_| *revision.write() += 1 }
            WeeklySchedule { is_admin: true, revision, on_change: move |_| {} }
        }
    }
}
