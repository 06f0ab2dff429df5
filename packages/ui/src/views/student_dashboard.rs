use dioxus::prelude::*;

use crate::{BookingList, LogoutButton, WeeklySchedule};

#[component]
pub fn StudentDashboardView(on_logout: EventHandler<()>) -> Element {
    let revision = use_signal(|| 0u32);
    let mut bookings_revision = use_signal(|| 0u32);

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "Available Lessons" }
                LogoutButton { on_logout }
            }
            WeeklySchedule {
                is_admin: false,
                revision,
                on_change: move |_| *bookings_revision.write() += 1,
            }
            BookingList { revision: bookings_revision }
        }
    }
}
