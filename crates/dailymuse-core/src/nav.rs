//! Dock navigation between page sections.

use crate::types::Category;

/// A link in the floating dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockLink {
    Today,
    Cinema,
    Music,
    Literature,
}

impl DockLink {
    pub const ALL: [DockLink; 4] = [
        DockLink::Today,
        DockLink::Cinema,
        DockLink::Music,
        DockLink::Literature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DockLink::Today => "Today",
            DockLink::Cinema => "Cinema",
            DockLink::Music => "Music",
            DockLink::Literature => "Literature",
        }
    }

    /// Element id of the section this link scrolls to
    pub fn target_id(&self) -> &'static str {
        match self {
            DockLink::Today => "today",
            DockLink::Cinema => Category::Movies.section_id(),
            DockLink::Music => Category::Music.section_id(),
            DockLink::Literature => Category::Books.section_id(),
        }
    }

    /// `href` the link would follow without interception
    pub fn href(&self) -> String {
        format!("#{}", self.target_id())
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Movies => DockLink::Cinema,
            Category::Music => DockLink::Music,
            Category::Books => DockLink::Literature,
        }
    }
}

/// Which dock link is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockState {
    active: DockLink,
}

impl Default for DockState {
    fn default() -> Self {
        Self {
            active: DockLink::Today,
        }
    }
}

impl DockState {
    /// Mark `link` as the only active link.
    pub fn select(&mut self, link: DockLink) {
        self.active = link;
    }

    pub fn class_for(&self, link: DockLink) -> &'static str {
        if link == self.active {
            "dock-link active"
        } else {
            "dock-link"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_match_category_sections() {
        for category in Category::ALL {
            let link = DockLink::for_category(category);
            assert_eq!(link.target_id(), category.section_id());
            assert_eq!(link.label(), category.label());
        }
        assert_eq!(DockLink::Today.href(), "#today");
    }

    #[test]
    fn test_select_leaves_one_active() {
        let mut dock = DockState::default();
        dock.select(DockLink::Music);
        let active: Vec<DockLink> = DockLink::ALL
            .into_iter()
            .filter(|l| dock.class_for(*l) == "dock-link active")
            .collect();
        assert_eq!(active, vec![DockLink::Music]);
    }
}
