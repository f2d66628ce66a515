//! Root-owned state shared with components via use_context.
//!
//! The App component creates each piece exactly once and provides it; child
//! components reach it through the `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In a card
//! let modal = use_modal();
//! rsx! { div { onclick: move |_| modal.open(&request), } }
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dailymuse_core::{
    bundled_edition, load_edition, CursorTrail, DockLink, DockState, Edition, ModalClick,
    ModalRequest, ModalSlot, RevealTracker, CLOSE_DELAY,
};
use dioxus::prelude::*;

use crate::ViewerConfig;

/// Get the viewer configuration.
pub fn get_config() -> ViewerConfig {
    crate::get_config()
}

/// Edition to show at startup.
///
/// A configured edition file that cannot be read is logged and replaced by
/// the bundled edition, so the page still renders.
pub fn initial_edition() -> Edition {
    if let Some(path) = get_config().edition_path {
        match load_edition(&path) {
            Ok(edition) => {
                tracing::info!("Loaded edition {:?} ({} items)", path, edition.len());
                return edition;
            }
            Err(e) => {
                tracing::error!("Failed to load edition {:?}: {}; using bundled edition", path, e);
            }
        }
    }

    bundled_edition().unwrap_or_else(|e| {
        tracing::error!("Bundled edition is unreadable: {}", e);
        Edition::default()
    })
}

/// Mounted page sections, keyed by the dock link that targets them
pub type SectionAnchors = HashMap<DockLink, Rc<MountedData>>;

/// Drives the single modal slot and its cancellable removal timer.
#[derive(Clone, Copy)]
pub struct ModalController {
    slot: Signal<ModalSlot>,
    removal: Signal<Option<Task>>,
}

impl ModalController {
    pub fn new(slot: Signal<ModalSlot>, removal: Signal<Option<Task>>) -> Self {
        Self { slot, removal }
    }

    pub fn slot(&self) -> Signal<ModalSlot> {
        self.slot
    }

    /// Show an item; a pending removal of the previous overlay is cancelled.
    pub fn open(mut self, request: &ModalRequest) {
        if self.slot.write().open(request).is_some() {
            self.cancel_removal();
        }
    }

    /// Handle a click on the overlay and schedule removal when it dismisses.
    pub fn click(mut self, target: ModalClick) {
        let Some(scheduled) = self.slot.write().click(target) else {
            return;
        };
        if scheduled.cancelled.is_some() {
            self.cancel_removal();
        }

        let mut slot = self.slot;
        let task = spawn(async move {
            tokio::time::sleep(CLOSE_DELAY).await;
            if slot.write().remove(scheduled.ticket) {
                tracing::debug!("Detail modal removed");
            }
        });
        self.removal.set(Some(task));
    }

    fn cancel_removal(&mut self) {
        if let Some(task) = self.removal.write().take() {
            task.cancel();
        }
    }
}

/// Hook to access the rendered edition.
pub fn use_edition() -> Signal<Edition> {
    use_context::<Signal<Edition>>()
}

/// Hook to access the modal controller.
pub fn use_modal() -> ModalController {
    use_context::<ModalController>()
}

/// Hook to access the scroll-reveal tracker.
pub fn use_reveal() -> Signal<RevealTracker> {
    use_context::<Signal<RevealTracker>>()
}

/// Hook to access the cursor trail.
pub fn use_cursor() -> Signal<CursorTrail> {
    use_context::<Signal<CursorTrail>>()
}

/// Hook to access the dock's active link.
pub fn use_dock() -> Signal<DockState> {
    use_context::<Signal<DockState>>()
}

/// Hook to access the mounted section anchors used for smooth scrolling.
pub fn use_anchors() -> Signal<SectionAnchors> {
    use_context::<Signal<SectionAnchors>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailymuse_core::Category;

    #[test]
    fn test_initial_edition_defaults_to_bundled() {
        // No command line was parsed, so no edition path is configured
        assert!(get_config().edition_path.is_none());

        let edition = initial_edition();
        for category in Category::ALL {
            assert!(!edition.items(category).is_empty());
        }
    }
}
