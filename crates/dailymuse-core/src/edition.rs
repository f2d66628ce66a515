//! Loading and saving edition files.
//!
//! An edition is the static data table the viewer renders. It is either read
//! from a JSON file written by the curator or taken from the copy bundled
//! into the binary.

use std::collections::HashSet;
use std::path::Path;

use crate::error::MuseResult;
use crate::types::{Edition, ItemId};

const BUNDLED_EDITION: &str = include_str!("../data/edition.json");

/// Parse an edition from JSON text.
pub fn parse_edition(json: &str) -> MuseResult<Edition> {
    Ok(serde_json::from_str(json)?)
}

/// The edition compiled into the binary.
pub fn bundled_edition() -> MuseResult<Edition> {
    parse_edition(BUNDLED_EDITION)
}

/// Read an edition file.
pub fn load_edition(path: impl AsRef<Path>) -> MuseResult<Edition> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let edition = parse_edition(&text)?;
    tracing::debug!(path = %path.display(), items = edition.len(), "Loaded edition");
    Ok(edition)
}

/// Write an edition file as pretty JSON, creating parent directories.
pub fn save_edition(path: impl AsRef<Path>, edition: &Edition) -> MuseResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(edition)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Ids shown in the edition at `path`.
///
/// A missing file means nothing was shown yet and yields an empty set.
pub fn previous_ids(path: impl AsRef<Path>) -> MuseResult<HashSet<ItemId>> {
    match load_edition(path) {
        Ok(edition) => Ok(edition.ids().cloned().collect()),
        Err(crate::MuseError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(HashSet::new())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Item};
    use tempfile::TempDir;

    #[test]
    fn test_bundled_edition_has_every_category() {
        let edition = bundled_edition().unwrap();
        for category in Category::ALL {
            assert!(
                !edition.items(category).is_empty(),
                "bundled edition missing {category}"
            );
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("edition.json");

        let mut edition = Edition::default();
        edition.books.push(Item {
            id: ItemId::from("b_1"),
            title: "The Stranger".to_string(),
            ..Default::default()
        });
        save_edition(&path, &edition).unwrap();

        let loaded = load_edition(&path).unwrap();
        assert_eq!(loaded, edition);
    }

    #[test]
    fn test_previous_ids_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let ids = previous_ids(dir.path().join("absent.json")).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_previous_ids_collects_all_categories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edition.json");
        std::fs::write(
            &path,
            r#"{"movies": [{"id": "m1"}], "music": [{"id": "a1"}], "books": [{"id": 3}]}"#,
        )
        .unwrap();

        let ids = previous_ids(&path).unwrap();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&ItemId::from("3")));
    }

    #[test]
    fn test_previous_ids_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edition.json");
        std::fs::write(&path, "const recommendations = {}").unwrap();
        assert!(previous_ids(&path).is_err());
    }
}
