//! Headline mood detection.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Mood of the day, derived from a news headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Conflict,
    TechFuture,
    RomanceMelancholy,
    SpiritualDeep,
    SocialJustice,
}

// Checked in order; the first group with a matching keyword wins.
const KEYWORDS: [(Mood, &[&str]); 4] = [
    (Mood::Conflict, &["war", "attack", "crisis", "tension", "army"]),
    (Mood::TechFuture, &["ai", "tech", "space", "launch", "robot", "climate"]),
    (
        Mood::RomanceMelancholy,
        &["love", "marriage", "divorce", "valentine", "heart"],
    ),
    (Mood::SocialJustice, &["protest", "strike", "law", "court", "scandal"]),
];

const SIMULATED_HEADLINES: [&str; 4] = [
    "Massive AI breakthrough changes how we write code",
    "Tensions rise in the border regions as peace talks fail",
    "A quiet day of reflection and meditation across the globe",
    "Protests erupt over wealth inequality in major capitals",
];

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Conflict,
        Mood::TechFuture,
        Mood::RomanceMelancholy,
        Mood::SpiritualDeep,
        Mood::SocialJustice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Conflict => "Conflict",
            Mood::TechFuture => "Tech/Future",
            Mood::RomanceMelancholy => "Romance/Melancholy",
            Mood::SpiritualDeep => "Spiritual/Deep",
            Mood::SocialJustice => "Social/Justice",
        }
    }

    /// Library tags that resonate with this mood
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Mood::Conflict => &["war", "chaos", "politics", "survival", "history"],
            Mood::TechFuture => &["technology", "future", "nature", "science", "dune"],
            Mood::RomanceMelancholy => &["love", "romance", "memory", "nostalgia", "heartbreak"],
            Mood::SpiritualDeep => &["spirituality", "meditation", "divine", "gratitude", "poetry"],
            Mood::SocialJustice => &["class", "inequality", "society", "justice", "truth"],
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a headline by keyword.
///
/// Matching is case-insensitive substring search, so "ai" also fires inside
/// longer words. Headlines matching nothing fall back to [`Mood::SpiritualDeep`].
pub fn analyze_mood(headline: &str) -> Mood {
    let lower = headline.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(mood, _)| *mood)
        .unwrap_or(Mood::SpiritualDeep)
}

/// Stand-in headline used when no real one is supplied.
pub fn simulated_headline<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SIMULATED_HEADLINES[rng.random_range(0..SIMULATED_HEADLINES.len())]
}
