//! Property-based tests for grid rendering, the modal slot and curation
//!
//! Uses proptest to verify the invariants the viewer relies on.

use std::collections::HashSet;

use dailymuse_core::curator::{select_edition, Library, LibraryItem, Mood, EDITION_SIZE};
use dailymuse_core::{grid_cards, Category, Item, ItemId, ModalClick, ModalRequest, ModalSlot};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,40}").expect("valid regex")
}

/// Items whose ids are drawn from a small pool, so grids often repeat an id
fn items_strategy(max: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0..4u8, title_strategy()), 0..max).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, title)| Item {
                id: ItemId(id.to_string()),
                title,
                ..Default::default()
            })
            .collect()
    })
}

/// Actions a user can take on the modal
#[derive(Debug, Clone)]
enum ModalOp {
    Open(u8),
    Click(ModalClick),
    /// Fire the removal timer scheduled `n` closes ago
    FireTimer(usize),
}

fn modal_ops_strategy() -> impl Strategy<Value = Vec<ModalOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => any::<u8>().prop_map(ModalOp::Open),
            2 => prop_oneof![
                Just(ModalClick::CloseControl),
                Just(ModalClick::Backdrop),
                Just(ModalClick::Content),
            ]
            .prop_map(ModalOp::Click),
            1 => (0..4usize).prop_map(ModalOp::FireTimer),
        ],
        0..40,
    )
}

fn library_strategy() -> impl Strategy<Value = Library> {
    let tags = prop::sample::select(vec!["war", "love", "poetry", "future", "justice", "jazz"]);
    let entry = (any::<u16>(), prop::collection::vec(tags, 0..4));
    prop::collection::vec(entry, 0..12).prop_map(|entries| {
        let items: Vec<LibraryItem> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (salt, tags))| LibraryItem {
                item: Item {
                    id: ItemId(format!("{i}-{salt}")),
                    ..Default::default()
                },
                tags: tags.into_iter().map(String::from).collect(),
                default_context: String::new(),
            })
            .collect();
        Library {
            movies: items.clone(),
            music: items.clone(),
            books: items,
        }
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Grid output mirrors its input one to one, in order
    #[test]
    fn grid_preserves_order_and_length(items in items_strategy(30)) {
        let cards = grid_cards(&items, "Cinema");
        prop_assert_eq!(cards.len(), items.len());
        for (index, (card, item)) in cards.iter().zip(&items).enumerate() {
            prop_assert_eq!(&card.title, &item.title);
            prop_assert_eq!(card.animation_delay.as_millis(), 100 * index as u128);
        }
    }

    /// Card keys within a grid never collide, even when item ids repeat
    #[test]
    fn grid_keys_are_unique(items in items_strategy(30)) {
        let cards = grid_cards(&items, "Music");
        let keys: HashSet<&String> = cards.iter().map(|c| &c.key).collect();
        prop_assert_eq!(keys.len(), cards.len());
    }

    /// Stale timers never remove an overlay; when an overlay is present and
    /// active, no removal is pending
    #[test]
    fn modal_slot_never_loses_active_overlay(ops in modal_ops_strategy()) {
        let mut slot = ModalSlot::new();
        let mut tickets = Vec::new();

        for op in ops {
            match op {
                ModalOp::Open(n) => {
                    let request = ModalRequest {
                        item: Item { id: ItemId(n.to_string()), ..Default::default() },
                        category: "Cinema".to_string(),
                    };
                    slot.open(&request);
                }
                ModalOp::Click(target) => {
                    if let Some(scheduled) = slot.click(target) {
                        tickets.push(scheduled.ticket);
                    }
                }
                ModalOp::FireTimer(back) => {
                    if let Some(ticket) = tickets.iter().rev().nth(back).copied() {
                        let was_active = slot.is_active();
                        let removed = slot.remove(ticket);
                        prop_assert!(!(removed && was_active));
                    }
                }
            }
            prop_assert!(!slot.is_active() || slot.is_present());
        }
    }

    /// Curated categories hold at most five items and never repeat one; an
    /// empty library yields empty categories
    #[test]
    fn curated_edition_is_bounded(lib in library_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let edition = select_edition(&lib, Mood::Conflict, &HashSet::new(), &mut rng);
        for category in Category::ALL {
            let items = edition.items(category);
            prop_assert_eq!(items.len(), lib.items(category).len().min(EDITION_SIZE));
            let ids: HashSet<&ItemId> = items.iter().map(|i| &i.id).collect();
            prop_assert_eq!(ids.len(), items.len());
        }
    }
}
