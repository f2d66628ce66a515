//! Scroll-reveal tracking for cards.
//!
//! Cards register when they mount. [`RevealTracker::arm`] takes the cards
//! registered at that moment, hides them, and reveals each one once it is at
//! least [`VISIBILITY_THRESHOLD`] visible. Cards that mount after arming are
//! left untracked and keep their default style.
//!
//! Visibility reports may arrive before arming. The latest one per card is
//! kept, and `arm` reveals a card at once if that report already met the
//! threshold.

use std::collections::{BTreeSet, HashMap};

/// Fraction of a card that must be visible before it is revealed.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

const TRANSITION: &str = "transition: opacity 0.6s ease, transform 0.6s ease;";

/// Reveal state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Not watched; rendered with the grid's own entrance animation
    Untracked,
    /// Watched and still offscreen
    Hidden,
    Revealed,
}

impl RevealState {
    /// Extra class for the card. Tracked cards opt out of the grid's CSS
    /// entrance animation so the inline styles take effect.
    pub fn class(&self) -> &'static str {
        match self {
            RevealState::Untracked => "",
            RevealState::Hidden | RevealState::Revealed => "tracked",
        }
    }

    /// Inline style for a card in this state
    pub fn style(&self) -> String {
        match self {
            RevealState::Untracked => String::new(),
            RevealState::Hidden => format!("opacity: 0; transform: translateY(20px); {TRANSITION}"),
            RevealState::Revealed => format!("opacity: 1; transform: translateY(0); {TRANSITION}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    mounted: BTreeSet<String>,
    tracked: HashMap<String, RevealState>,
    /// Latest intersection ratio reported for a mounted, untracked card
    reported: HashMap<String, f64>,
    armed: bool,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mounted card.
    pub fn register(&mut self, key: impl Into<String>) {
        self.mounted.insert(key.into());
    }

    /// Forget an unmounted card. If it mounts again it is a new element and
    /// stays untracked.
    pub fn unregister(&mut self, key: &str) {
        self.mounted.remove(key);
        self.tracked.remove(key);
        self.reported.remove(key);
    }

    /// Start watching every card mounted right now. Returns how many cards
    /// were newly tracked.
    ///
    /// A card whose last report before arming was already past the
    /// threshold is revealed immediately; the rest start hidden.
    pub fn arm(&mut self) -> usize {
        self.armed = true;
        let mut added = 0;
        let mut revealed = 0;
        for key in &self.mounted {
            if self.tracked.contains_key(key) {
                continue;
            }
            let visible = self
                .reported
                .remove(key)
                .is_some_and(|ratio| ratio >= VISIBILITY_THRESHOLD);
            let state = if visible {
                revealed += 1;
                RevealState::Revealed
            } else {
                RevealState::Hidden
            };
            self.tracked.insert(key.clone(), state);
            added += 1;
        }
        tracing::debug!(added, revealed, "Reveal tracker armed");
        added
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed a visibility report for `key`. Returns true when the card was
    /// revealed by this report.
    ///
    /// Reports for a mounted card that is not tracked yet are remembered
    /// for the next [`arm`](Self::arm).
    pub fn observe(&mut self, key: &str, intersection_ratio: f64) -> bool {
        match self.tracked.get_mut(key) {
            Some(state)
                if *state == RevealState::Hidden && intersection_ratio >= VISIBILITY_THRESHOLD =>
            {
                *state = RevealState::Revealed;
                true
            }
            Some(_) => false,
            None => {
                if self.mounted.contains(key) {
                    self.reported.insert(key.to_string(), intersection_ratio);
                }
                false
            }
        }
    }

    pub fn state(&self, key: &str) -> RevealState {
        self.tracked
            .get(key)
            .copied()
            .unwrap_or(RevealState::Untracked)
    }
}
