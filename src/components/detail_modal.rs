//! Detail Modal Component
//!
//! Full write-up for the selected item, layered over the page.

use dailymuse_core::ModalClick;
use dioxus::prelude::*;

use crate::context::use_modal;

/// Detail overlay for the item in the modal slot.
///
/// Renders nothing while the slot is empty. The close control and the dimmed
/// backdrop both dismiss; clicks inside the panel do not. Narrative fields
/// come from the curated edition and are inserted as markup.
#[component]
pub fn DetailModal() -> Element {
    let modal = use_modal();
    let slot = modal.slot();

    let Some(view) = slot.read().view().cloned() else {
        return VNode::empty();
    };
    let overlay_class = slot.read().overlay_class();

    rsx! {
        div {
            class: "{overlay_class}",
            onclick: move |_| modal.click(ModalClick::Backdrop),

            div {
                class: "modal-content",
                onclick: move |e| {
                    e.stop_propagation();
                    modal.click(ModalClick::Content);
                },

                div { class: "modal-header",
                    img {
                        src: "{view.banner_image}",
                        alt: "{view.banner_alt}",
                        class: "modal-banner-image",
                    }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |e| {
                            e.stop_propagation();
                            modal.click(ModalClick::CloseControl);
                        },
                        "×"
                    }
                }

                div { class: "modal-body",
                    div { class: "modal-category", "{view.category}" }
                    h2 { class: "modal-title", dangerous_inner_html: "{view.title}" }
                    div { class: "modal-subtitle", dangerous_inner_html: "{view.subtitle}" }

                    div { class: "modal-significance", dangerous_inner_html: "{view.significance}" }

                    div { class: "modal-section technician",
                        span { class: "modal-label", "{view.technician_label}" }
                        p { class: "modal-text", dangerous_inner_html: "{view.technician_review}" }
                    }

                    div { class: "modal-section artist",
                        span { class: "modal-label", "{view.artist_label}" }
                        p { class: "modal-text", dangerous_inner_html: "{view.artist_fact}" }
                    }

                    div { class: "quote-block", dangerous_inner_html: "{view.soul_quote}" }
                }
            }
        }
    }
}
