//! Bento Card Component
//!
//! One recommended item: image, context line, title and subtitle.

use dailymuse_core::CardView;
use dioxus::prelude::*;

use crate::context::{use_modal, use_reveal};

/// A single card in a bento grid.
///
/// Registers with the scroll-reveal tracker while mounted and opens the
/// detail modal for its item on click. The `data-reveal-key` attribute is
/// what the page's visibility observer reports back.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BentoCard { card: CardView::new(&item, "Cinema") }
/// }
/// ```
#[component]
pub fn BentoCard(card: CardView) -> Element {
    let modal = use_modal();
    let mut reveal = use_reveal();

    let drop_key = card.key.clone();
    use_drop(move || reveal.write().unregister(&drop_key));

    let mount_key = card.key.clone();
    let request = card.on_click.clone();

    let state = reveal.read().state(&card.key);
    let class = format!("{} {}", card.class, state.class());
    let style = format!("{} {}", card.delay_style(), state.style());

    rsx! {
        div {
            class: "{class}",
            "data-id": "{card.id}",
            "data-reveal-key": "{card.key}",
            style: "{style}",
            onmounted: move |_| reveal.write().register(mount_key.clone()),
            onclick: move |_| modal.open(&request),

            img {
                src: "{card.image}",
                alt: "{card.alt}",
                class: "card-image",
                "loading": "lazy",
            }
            div { class: "card-overlay",
                div { class: "card-context", "{card.context}" }
                h3 { class: "card-title", "{card.title}" }
                div { class: "card-subtitle", "{card.subtitle}" }
            }
        }
    }
}
