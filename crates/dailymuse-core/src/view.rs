//! View models for cards, grids and the detail modal.
//!
//! Components render these verbatim, so everything the page shows for an
//! item is decided here and can be checked without a renderer.

use std::time::Duration;

use crate::types::{Item, ItemId};

/// Context line shown when an item has no `dailyContext`.
pub const CONTEXT_FALLBACK: &str = "Art for today.";

/// Stagger between consecutive cards' entrance animations.
pub const REVEAL_STEP: Duration = Duration::from_millis(100);

pub const TECHNICIAN_LABEL: &str = "The Technician's View";
pub const ARTIST_LABEL: &str = "Artist Story";

/// Entrance delay of the card at `index` within its grid.
pub fn reveal_delay(index: usize) -> Duration {
    REVEAL_STEP * index as u32
}

/// CSS time value for a delay, in seconds (`0s`, `0.1s`, `1.2s`).
pub fn css_seconds(delay: Duration) -> String {
    format!("{}s", delay.as_millis() as f64 / 1000.0)
}

/// What a card click asks the modal controller to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalRequest {
    pub item: Item,
    pub category: String,
}

/// Key of the card at `index` in a grid. Ids may repeat within a grid, so
/// the position is part of the key.
fn card_key(category: &str, index: usize, id: &ItemId) -> String {
    format!("{category}/{index}/{id}")
}

/// One card in a bento grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Render key, unique within the page: `category/position/id`
    pub key: String,
    pub id: ItemId,
    /// `bento-card <layout>`
    pub class: String,
    pub image: String,
    pub alt: String,
    pub context: String,
    pub title: String,
    pub subtitle: String,
    pub animation_delay: Duration,
    /// Payload handed to the modal controller on click
    pub on_click: ModalRequest,
}

impl CardView {
    /// Card for a lone item, keyed as if it were first in its grid.
    pub fn new(item: &Item, category: &str) -> Self {
        Self {
            key: card_key(category, 0, &item.id),
            id: item.id.clone(),
            class: format!("bento-card {}", item.layout.class_name()),
            image: item.image.clone(),
            alt: item.title.clone(),
            context: item
                .daily_context
                .clone()
                .unwrap_or_else(|| CONTEXT_FALLBACK.to_string()),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            animation_delay: Duration::ZERO,
            on_click: ModalRequest {
                item: item.clone(),
                category: category.to_string(),
            },
        }
    }

    /// Inline style carrying the staggered entrance delay
    pub fn delay_style(&self) -> String {
        format!("animation-delay: {};", css_seconds(self.animation_delay))
    }
}

/// Cards for a whole grid, in input order with linearly increasing delays.
///
/// The result replaces whatever the grid showed before, so rendering the same
/// container twice never accumulates cards.
pub fn grid_cards(items: &[Item], category: &str) -> Vec<CardView> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CardView {
            key: card_key(category, index, &item.id),
            animation_delay: reveal_delay(index),
            ..CardView::new(item, category)
        })
        .collect()
}

/// Contents of the detail overlay.
///
/// The narrative fields are trusted markup from the edition file and are
/// inserted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub banner_image: String,
    pub banner_alt: String,
    pub category: String,
    pub title: String,
    pub subtitle: String,
    pub significance: String,
    pub technician_label: &'static str,
    pub technician_review: String,
    pub artist_label: &'static str,
    pub artist_fact: String,
    pub soul_quote: String,
}

impl ModalView {
    pub fn new(request: &ModalRequest) -> Self {
        let item = &request.item;
        Self {
            banner_image: item.image.clone(),
            banner_alt: item.title.clone(),
            category: request.category.clone(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            significance: item.significance.clone(),
            technician_label: TECHNICIAN_LABEL,
            technician_review: item.technician_review.clone(),
            artist_label: ARTIST_LABEL,
            artist_fact: item.artist_fact.clone(),
            soul_quote: format!("\"{}\"", item.soul_note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layout;

    fn item(id: &str, title: &str) -> Item {
        Item {
            id: ItemId::from(id),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_class_uses_layout() {
        let mut featured = item("1", "A");
        featured.layout = Layout::Featured;
        assert_eq!(CardView::new(&featured, "Cinema").class, "bento-card featured");
        assert_eq!(CardView::new(&item("2", "B"), "Cinema").class, "bento-card regular");
    }

    #[test]
    fn test_card_context_fallback() {
        let card = CardView::new(&item("1", "A"), "Music");
        assert_eq!(card.context, CONTEXT_FALLBACK);

        let mut with_context = item("1", "A");
        with_context.daily_context = Some("For the rain.".to_string());
        assert_eq!(CardView::new(&with_context, "Music").context, "For the rain.");
    }

    #[test]
    fn test_css_seconds() {
        assert_eq!(css_seconds(reveal_delay(0)), "0s");
        assert_eq!(css_seconds(reveal_delay(1)), "0.1s");
        assert_eq!(css_seconds(reveal_delay(3)), "0.3s");
        assert_eq!(css_seconds(reveal_delay(12)), "1.2s");
    }

    #[test]
    fn test_grid_delays_are_linear() {
        let items = vec![item("1", "A"), item("2", "B"), item("3", "C")];
        let cards = grid_cards(&items, "Literature");
        let delays: Vec<u128> = cards.iter().map(|c| c.animation_delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 100, 200]);
        assert_eq!(cards[2].delay_style(), "animation-delay: 0.2s;");
    }

    #[test]
    fn test_card_keys_distinguish_categories() {
        let shared = item("1", "Same id");
        assert_ne!(
            CardView::new(&shared, "Cinema").key,
            CardView::new(&shared, "Music").key
        );
    }

    #[test]
    fn test_duplicate_ids_get_distinct_keys() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id": 1, "title": "First"}, {"id": 1, "title": "Second"}]"#,
        )
        .unwrap();
        let cards = grid_cards(&items, "Cinema");
        assert_eq!(cards[0].key, "Cinema/0/1");
        assert_eq!(cards[1].key, "Cinema/1/1");
        assert_ne!(cards[0].key, cards[1].key);
        assert_eq!(cards[1].id, cards[0].id);
    }

    #[test]
    fn test_modal_soul_quote_is_quoted() {
        let mut it = item("1", "A");
        it.soul_note = "calm".to_string();
        let view = ModalView::new(&ModalRequest {
            item: it,
            category: "Cinema".to_string(),
        });
        assert_eq!(view.soul_quote, "\"calm\"");
        assert_eq!(view.technician_label, "The Technician's View");
        assert_eq!(view.artist_label, "Artist Story");
    }
}
