//! Today page - the whole daily edition on one scrolling page.
//!
//! Hero with the date, then one bento grid per category, with the dock,
//! detail modal and custom cursor layered on top.

use dailymuse_core::{today_label, Category, DockLink, Point};
use dioxus::prelude::*;

use crate::components::{BentoGrid, CursorFollower, DetailModal, DockNav, Hero};
use crate::context::{use_anchors, use_cursor, use_edition};

/// Today page component.
///
/// Tracks the pointer for the custom cursor and registers each section as a
/// scroll target for the dock.
#[component]
pub fn Today() -> Element {
    let edition = use_edition();
    let mut cursor = use_cursor();
    let mut anchors = use_anchors();
    let date_label = use_hook(today_label);

    rsx! {
        div {
            class: "page",
            onmousemove: move |evt| {
                let pos = evt.client_coordinates();
                cursor.write().move_to(Point::new(pos.x, pos.y));
            },

            section {
                id: DockLink::Today.target_id(),
                onmounted: move |evt| {
                    anchors.write().insert(DockLink::Today, evt.data());
                },
                Hero { date_label: date_label.clone() }
            }

            for category in Category::ALL {
                section {
                    key: "{category.section_id()}",
                    id: "{category.section_id()}",
                    class: "category-section",
                    onmounted: move |evt| {
                        anchors.write().insert(DockLink::for_category(category), evt.data());
                    },

                    h2 { class: "section-header", "{category.label()}" }
                    BentoGrid {
                        items: edition.read().items(category).to_vec(),
                        container_id: category.container_id().to_string(),
                        category: category.label().to_string(),
                    }
                }
            }

            DockNav {}
            DetailModal {}
            CursorFollower {}
        }
    }
}
