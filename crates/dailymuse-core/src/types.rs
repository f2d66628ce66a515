//! Core types for Daily Muse

use serde::{Deserialize, Serialize};

/// Identifier of a recommended item.
///
/// Editions written by hand often use bare numbers while curated editions use
/// strings like `"m_1705000000_412"`, so both are accepted and kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawItemId")]
pub struct ItemId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Text(s) => Self(s),
            RawItemId::Number(n) => Self(n.to_string()),
        }
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-size hint for a card in the bento grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Featured,
    Tall,
    Wide,
    #[default]
    #[serde(other)]
    Regular,
}

impl Layout {
    /// CSS modifier class for this layout
    pub fn class_name(&self) -> &'static str {
        match self {
            Layout::Featured => "featured",
            Layout::Tall => "tall",
            Layout::Wide => "wide",
            Layout::Regular => "regular",
        }
    }

    /// Layouts assigned to a curated category, by rank
    pub const EDITION_ORDER: [Layout; 5] = [
        Layout::Featured,
        Layout::Tall,
        Layout::Wide,
        Layout::Regular,
        Layout::Regular,
    ];
}

/// One recommended movie, album or book.
///
/// Every text field tolerates absence and renders blank; only `daily_context`
/// has a visible fallback (see [`crate::view::CONTEXT_FALLBACK`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    /// Image reference (relative path or URL)
    pub image: String,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_context: Option<String>,
    pub significance: String,
    pub technician_review: String,
    pub artist_fact: String,
    pub soul_note: String,
}

/// Item category, one grid per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movies,
    Music,
    Books,
}

impl Category {
    /// All categories in render order
    pub const ALL: [Category; 3] = [Category::Movies, Category::Music, Category::Books];

    /// Human label shown on cards and in the modal
    pub fn label(&self) -> &'static str {
        match self {
            Category::Movies => "Cinema",
            Category::Music => "Music",
            Category::Books => "Literature",
        }
    }

    /// Element id of the grid container
    pub fn container_id(&self) -> &'static str {
        match self {
            Category::Movies => "movies-grid",
            Category::Music => "music-grid",
            Category::Books => "books-grid",
        }
    }

    /// Element id of the page section holding the grid
    pub fn section_id(&self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::Music => "music",
            Category::Books => "books",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.section_id())
    }
}

/// A day's selection: three ordered item sequences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edition {
    pub movies: Vec<Item>,
    pub music: Vec<Item>,
    pub books: Vec<Item>,
}

impl Edition {
    /// Items of one category, in display order
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Movies => &self.movies,
            Category::Music => &self.music,
            Category::Books => &self.books,
        }
    }

    pub fn items_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Movies => &mut self.movies,
            Category::Music => &mut self.music,
            Category::Books => &mut self.books,
        }
    }

    /// Total number of items across categories
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every item id in the edition
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.items(c).iter().map(|item| &item.id))
    }
}
