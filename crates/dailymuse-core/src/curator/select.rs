//! Choosing the day's edition from the master library.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::mood::Mood;
use crate::error::MuseResult;
use crate::types::{Category, Edition, Item, ItemId, Layout};

/// Items per category in a curated edition
pub const EDITION_SIZE: usize = 5;

/// Weight of each tag shared with the mood
const TAG_WEIGHT: u32 = 2;

/// A library entry: the displayable item plus curation metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Context line used when the item is picked
    #[serde(default)]
    pub default_context: String,
}

/// The master library every edition is drawn from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    pub movies: Vec<LibraryItem>,
    pub music: Vec<LibraryItem>,
    pub books: Vec<LibraryItem>,
}

impl Library {
    pub fn items(&self, category: Category) -> &[LibraryItem] {
        match category {
            Category::Movies => &self.movies,
            Category::Music => &self.music,
            Category::Books => &self.books,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> MuseResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Mood resonance of an item.
pub fn score_item(item: &LibraryItem, mood_tags: &[&str]) -> u32 {
    item.tags
        .iter()
        .filter(|tag| mood_tags.contains(&tag.as_str()))
        .count() as u32
        * TAG_WEIGHT
}

/// Pick up to [`EDITION_SIZE`] items per category.
///
/// Items are shuffled first so equal scores break randomly. Items not in
/// `excluded` rank ahead of recently shown ones regardless of score; within
/// each group higher scores come first. Picked items get layouts by rank and
/// their default context as the daily context. A category with no library
/// items stays empty in the edition.
pub fn select_edition<R: Rng + ?Sized>(
    library: &Library,
    mood: Mood,
    excluded: &HashSet<ItemId>,
    rng: &mut R,
) -> Edition {
    let mood_tags = mood.tags();
    let mut edition = Edition::default();

    for category in Category::ALL {
        let mut pool: Vec<&LibraryItem> = library.items(category).iter().collect();
        if pool.is_empty() {
            tracing::warn!(%category, "Library has nothing to curate; category left empty");
            continue;
        }
        pool.shuffle(rng);

        let (mut fresh, mut stale): (Vec<_>, Vec<_>) =
            pool.into_iter().partition(|entry| !excluded.contains(&entry.item.id));
        fresh.sort_by_key(|entry| Reverse(score_item(entry, mood_tags)));
        stale.sort_by_key(|entry| Reverse(score_item(entry, mood_tags)));

        let picked = edition.items_mut(category);
        for (entry, layout) in fresh
            .into_iter()
            .chain(stale)
            .take(EDITION_SIZE)
            .zip(Layout::EDITION_ORDER)
        {
            let mut item = entry.item.clone();
            item.layout = layout;
            item.daily_context =
                (!entry.default_context.is_empty()).then(|| entry.default_context.clone());
            picked.push(item);
        }
        tracing::debug!(%category, picked = picked.len(), "Curated category");
    }

    edition
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(id: &str, tags: &[&str]) -> LibraryItem {
        LibraryItem {
            item: Item {
                id: ItemId::from(id),
                title: id.to_uppercase(),
                ..Default::default()
            },
            tags: tags.iter().map(|t| t.to_string()).collect(),
            default_context: format!("context {id}"),
        }
    }

    fn library(entries: Vec<LibraryItem>) -> Library {
        Library {
            movies: entries.clone(),
            music: entries.clone(),
            books: entries,
        }
    }

    #[test]
    fn test_score_counts_shared_tags_twice() {
        let item = entry("a", &["war", "history", "jazz"]);
        assert_eq!(score_item(&item, Mood::Conflict.tags()), 4);
        assert_eq!(score_item(&item, Mood::RomanceMelancholy.tags()), 0);
    }

    #[test]
    fn test_highest_score_is_featured() {
        let lib = library(vec![
            entry("calm", &["poetry"]),
            entry("battle", &["war", "history", "survival"]),
            entry("plain", &[]),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let edition = select_edition(&lib, Mood::Conflict, &HashSet::new(), &mut rng);

        let first = &edition.movies[0];
        assert_eq!(first.id.as_str(), "battle");
        assert_eq!(first.layout, Layout::Featured);
        assert_eq!(first.daily_context.as_deref(), Some("context battle"));
        assert_eq!(edition.movies.len(), 3);
    }

    #[test]
    fn test_fresh_items_precede_stale() {
        let lib = library(vec![
            entry("shown", &["war", "chaos", "history"]),
            entry("new", &[]),
        ]);
        let excluded: HashSet<ItemId> = [ItemId::from("shown")].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);
        let edition = select_edition(&lib, Mood::Conflict, &excluded, &mut rng);

        let ids: Vec<&str> = edition.books.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "shown"]);
    }

    #[test]
    fn test_caps_at_edition_size_with_layouts() {
        let entries: Vec<LibraryItem> = (0..9).map(|i| entry(&format!("i{i}"), &[])).collect();
        let mut rng = StdRng::seed_from_u64(9);
        let edition =
            select_edition(&library(entries), Mood::SpiritualDeep, &HashSet::new(), &mut rng);

        let layouts: Vec<Layout> = edition.music.iter().map(|i| i.layout).collect();
        assert_eq!(layouts, Layout::EDITION_ORDER.to_vec());
    }

    #[test]
    fn test_empty_category_stays_empty() {
        let lib = Library {
            movies: vec![entry("a", &[])],
            music: vec![entry("b", &[])],
            books: Vec::new(),
        };
        let mut rng = StdRng::seed_from_u64(0);
        let edition = select_edition(&lib, Mood::Conflict, &HashSet::new(), &mut rng);
        assert!(edition.books.is_empty());
        assert_eq!(edition.movies.len(), 1);
        assert_eq!(edition.music[0].id.as_str(), "b");
        assert_eq!(edition.music[0].layout, Layout::Featured);
    }

    #[test]
    fn test_library_json_shape() {
        let lib: Library = serde_json::from_str(
            r#"{"movies": [{"id": "m1", "title": "T", "tags": ["war"], "defaultContext": "\"T\""}]}"#,
        )
        .unwrap();
        assert_eq!(lib.movies[0].item.title, "T");
        assert_eq!(lib.movies[0].tags, vec!["war".to_string()]);
        assert_eq!(lib.movies[0].default_context, "\"T\"");
        assert!(lib.music.is_empty());
    }
}
