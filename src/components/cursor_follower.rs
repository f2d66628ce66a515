//! Cursor Follower Component
//!
//! Gold dot pinned to the pointer plus a ring that drifts after it.

use dioxus::prelude::*;

use crate::context::use_cursor;

/// The two cursor elements. Mounted once by the page and never torn down.
#[component]
pub fn CursorFollower() -> Element {
    let cursor = use_cursor();
    let trail = cursor.read();

    rsx! {
        div { class: "cursor-dot", style: "{trail.dot_style()}" }
        div { class: "cursor-outline", style: "{trail.outline_style()}" }
    }
}
