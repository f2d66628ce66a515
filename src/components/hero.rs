//! Hero Component

use dioxus::prelude::*;

/// Masthead with today's date.
#[component]
pub fn Hero(
    /// Date label, e.g. `JAN 13 • 2026`
    date_label: String,
) -> Element {
    rsx! {
        header { class: "hero",
            div { id: "daily-date", class: "hero-date", "{date_label}" }
            h1 { class: "hero-title", "Daily Muse" }
            p { class: "hero-tagline", "One film, one record, one book. Art for today." }
        }
    }
}
