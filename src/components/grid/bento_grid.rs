//! Bento Grid Component
//!
//! Lays out one category's items as cards with a cascading entrance.

use dailymuse_core::{grid_cards, Item};
use dioxus::prelude::*;

use super::BentoCard;

/// Grid of cards for one category.
///
/// Re-rendering with new items replaces every card. Cards are keyed by
/// category, position and item id, so repeated ids stay distinct.
#[component]
pub fn BentoGrid(
    /// Items in display order
    items: Vec<Item>,
    /// Element id of the grid container
    container_id: String,
    /// Category label passed to the detail modal
    category: String,
) -> Element {
    let cards = grid_cards(&items, &category);

    rsx! {
        div { id: "{container_id}", class: "bento-grid",
            for card in cards {
                BentoCard { key: "{card.key}", card: card.clone() }
            }
        }
    }
}
