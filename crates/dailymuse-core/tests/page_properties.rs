//! Page behaviour tests
//!
//! Exercise the card, grid and modal view logic the way the desktop viewer
//! drives it.

use dailymuse_core::{
    bundled_edition, grid_cards, CardView, Category, Item, ItemId, ModalClick, ModalRequest,
    ModalSlot, ModalView, RevealState, RevealTracker, CLOSE_DELAY, CONTEXT_FALLBACK,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn nightfall() -> Item {
    serde_json::from_str(
        r#"{
            "id": 1,
            "title": "Nightfall",
            "subtitle": "A quiet film",
            "image": "a.jpg",
            "significance": "<em>Slow</em> and luminous.",
            "technicianReview": "Natural light only.",
            "artistFact": "Shot in nine nights.",
            "soulNote": "calm"
        }"#,
    )
    .unwrap()
}

fn numbered(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            id: ItemId(format!("item-{i}")),
            title: format!("Title {i}"),
            ..Default::default()
        })
        .collect()
}

// ============================================================================
// Card Renderer
// ============================================================================

#[test]
fn test_nightfall_card_opens_modal_under_its_category() {
    let card = CardView::new(&nightfall(), "Cinema");

    assert_eq!(card.title, "Nightfall");
    assert_eq!(card.id.as_str(), "1");
    assert_eq!(card.image, "a.jpg");
    assert_eq!(card.alt, "Nightfall");

    let mut slot = ModalSlot::new();
    slot.open(&card.on_click);
    let view = slot.view().unwrap();
    assert_eq!(view.category, "Cinema");
    assert_eq!(view.title, "Nightfall");
}

#[test]
fn test_missing_daily_context_uses_fallback() {
    let card = CardView::new(&nightfall(), "Cinema");
    assert_eq!(card.context, CONTEXT_FALLBACK);
    assert_eq!(card.context, "Art for today.");
}

#[test]
fn test_sparse_item_renders_blank_fields() {
    let sparse: Item = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
    let card = CardView::new(&sparse, "Music");
    assert_eq!(card.title, "");
    assert_eq!(card.subtitle, "");
    assert_eq!(card.class, "bento-card regular");
}

// ============================================================================
// Grid Renderer
// ============================================================================

#[test]
fn test_grid_has_one_card_per_item_in_order() {
    let items = numbered(7);
    let cards = grid_cards(&items, "Literature");

    assert_eq!(cards.len(), items.len());
    for (card, item) in cards.iter().zip(&items) {
        assert_eq!(card.id, item.id);
        assert_eq!(card.title, item.title);
    }
}

#[test]
fn test_rerender_replaces_previous_cards() {
    let mut shown = grid_cards(&numbered(5), "Music");
    assert_eq!(shown.len(), 5);
    let second: Vec<Item> = numbered(2)
        .into_iter()
        .map(|mut item| {
            item.title.push_str(" (new)");
            item
        })
        .collect();

    shown = grid_cards(&second, "Music");

    assert_eq!(shown.len(), 2);
    assert!(shown.iter().all(|c| c.title.ends_with("(new)")));
}

#[test]
fn test_bundled_edition_renders_every_grid() {
    let edition = bundled_edition().unwrap();
    for category in Category::ALL {
        let cards = grid_cards(edition.items(category), category.label());
        assert_eq!(cards.len(), edition.items(category).len());
        assert!(cards.iter().all(|c| c.on_click.category == category.label()));
    }
}

// ============================================================================
// Modal Controller
// ============================================================================

#[test]
fn test_modal_renders_every_narrative_field_verbatim() {
    let item = nightfall();
    let view = ModalView::new(&ModalRequest {
        item: item.clone(),
        category: "Cinema".to_string(),
    });

    assert_eq!(view.title, item.title);
    assert_eq!(view.subtitle, item.subtitle);
    assert_eq!(view.significance, "<em>Slow</em> and luminous.");
    assert_eq!(view.technician_review, item.technician_review);
    assert_eq!(view.artist_fact, item.artist_fact);
    assert!(view.soul_quote.contains(&item.soul_note));
    assert_eq!(view.banner_image, "a.jpg");
}

#[test]
fn test_both_dismissal_paths_behave_alike() {
    for path in [ModalClick::CloseControl, ModalClick::Backdrop] {
        let mut slot = ModalSlot::new();
        slot.open(&CardView::new(&nightfall(), "Cinema").on_click);

        let scheduled = slot.click(path).unwrap();
        assert!(!slot.is_active(), "{path:?} should drop active at once");
        assert!(slot.is_present(), "{path:?} keeps overlay during transition");
        assert_eq!(slot.overlay_class(), "modal-overlay");

        assert!(slot.remove(scheduled.ticket));
        assert!(!slot.is_present(), "{path:?} should remove the overlay");
    }
    assert_eq!(CLOSE_DELAY.as_millis(), 400);
}

#[test]
fn test_opening_second_item_keeps_single_overlay() {
    let mut slot = ModalSlot::new();
    let items = numbered(2);
    slot.open(&CardView::new(&items[0], "Music").on_click);
    slot.close();
    slot.open(&CardView::new(&items[1], "Music").on_click);

    assert!(slot.is_active());
    assert_eq!(slot.view().unwrap().title, "Title 1");
}

// ============================================================================
// Animation Observer
// ============================================================================

#[test]
fn test_grid_cards_reveal_after_arming() {
    let cards = grid_cards(&numbered(3), "Cinema");
    let mut tracker = RevealTracker::new();
    for card in &cards {
        tracker.register(card.key.clone());
    }
    tracker.arm();

    assert!(tracker.observe(&cards[0].key, 0.4));
    assert_eq!(tracker.state(&cards[0].key), RevealState::Revealed);
    assert_eq!(tracker.state(&cards[1].key), RevealState::Hidden);
}

#[test]
fn test_onscreen_cards_reported_before_arming_are_revealed() {
    let items: Vec<Item> =
        serde_json::from_str(r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#).unwrap();
    let cards = grid_cards(&items, "Cinema");
    let mut tracker = RevealTracker::new();
    for card in &cards {
        tracker.register(card.key.clone());
    }
    // First card is on screen at load, second is below the fold
    tracker.observe(&cards[0].key, 1.0);
    tracker.observe(&cards[1].key, 0.0);
    assert_eq!(tracker.arm(), 2);

    assert_eq!(tracker.state(&cards[0].key), RevealState::Revealed);
    assert_eq!(tracker.state(&cards[1].key), RevealState::Hidden);
    assert_eq!(tracker.state(&cards[1].key).class(), "tracked");
}
