use dioxus::prelude::*;
use store::Booking;

use crate::auth::use_session;

/// The student's bookings, cancelled ones included, as `title — status`.
/// Reloads whenever `revision` changes.
#[component]
pub fn BookingList(revision: Signal<u32>) -> Element {
    let session = use_session();
    let mut bookings = use_signal(Vec::<Booking>::new);

    let _ = use_resource(move || {
        let _ = revision();
        let api = session.peek().api();
        async move {
            match api.list_bookings().await {
                Ok(list) => bookings.set(list),
                Err(e) => tracing::error!("Bookings fetch error: {}", e),
            }
        }
    });

    rsx! {
        section {
            class: "booking-list",
            h3 { "My Bookings" }
            if bookings.read().is_empty() {
                p { class: "muted", "No bookings yet." }
            }
            ul {
                for booking in bookings.read().iter() {
                    li {
                        key: "{booking.id}",
                        class: if booking.is_cancelled() { "booking cancelled" } else { "booking" },
                        "{booking.lesson.title} — {booking.status}"
                    }
                }
            }
        }
    }
}
