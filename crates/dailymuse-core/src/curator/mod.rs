//! Daily curation: headline → mood → edition.
//!
//! A headline (real or simulated) is classified into a [`Mood`]; every
//! library item is scored against the mood's tags and the best fresh items
//! become the day's [`Edition`]. [`marketing`] then announces the edition
//! through the page meta tags, an RSS feed and a social post.

pub mod marketing;
mod mood;
mod select;

use std::collections::HashSet;

use rand::Rng;

pub use marketing::{publish, Channel, PublishOutcome, PublishTargets, DEFAULT_SITE_URL};
pub use mood::{analyze_mood, simulated_headline, Mood};
pub use select::{score_item, select_edition, Library, LibraryItem, EDITION_SIZE};

use crate::types::{Edition, ItemId};

/// Result of one curation run
#[derive(Debug, Clone, PartialEq)]
pub struct Curation {
    pub headline: String,
    pub mood: Mood,
    pub edition: Edition,
}

/// Run the whole pipeline for one day.
///
/// Without a headline a simulated one is drawn from `rng`.
pub fn curate<R: Rng + ?Sized>(
    library: &Library,
    headline: Option<&str>,
    excluded: &HashSet<ItemId>,
    rng: &mut R,
) -> Curation {
    let headline = match headline {
        Some(h) => h.to_string(),
        None => simulated_headline(rng).to_string(),
    };
    let mood = analyze_mood(&headline);
    tracing::info!(%headline, %mood, excluded = excluded.len(), "Curating edition");

    let edition = select_edition(library, mood, excluded, rng);
    Curation {
        headline,
        mood,
        edition,
    }
}
