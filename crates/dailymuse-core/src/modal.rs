//! The single detail-modal slot.
//!
//! Opening shows the overlay already active. Dismissal drops the active state
//! at once and schedules physical removal [`CLOSE_DELAY`] later. Each scheduled
//! removal carries a [`RemovalTicket`]; opening or closing again supersedes the
//! pending ticket, so a timer that fires late cannot remove a newer overlay.

use std::time::Duration;

use crate::view::{ModalRequest, ModalView};

/// Time the closing transition is given before the overlay is removed.
pub const CLOSE_DELAY: Duration = Duration::from_millis(400);

/// Handle for one scheduled removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemovalTicket(u64);

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The explicit `×` control
    CloseControl,
    /// The dimmed background outside the content panel
    Backdrop,
    /// Anywhere inside the content panel
    Content,
}

/// A removal that was just scheduled by a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRemoval {
    pub ticket: RemovalTicket,
    /// Earlier removal that must be cancelled
    pub cancelled: Option<RemovalTicket>,
}

#[derive(Debug, Default)]
pub struct ModalSlot {
    view: Option<ModalView>,
    active: bool,
    pending: Option<RemovalTicket>,
    next_ticket: u64,
}

impl ModalSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `request` in the slot, replacing any overlay still on screen.
    ///
    /// Returns the pending removal that the caller must cancel, if any.
    pub fn open(&mut self, request: &ModalRequest) -> Option<RemovalTicket> {
        tracing::debug!(
            item = %request.item.id,
            category = %request.category,
            "Opening detail modal"
        );
        self.view = Some(ModalView::new(request));
        self.active = true;
        self.pending.take()
    }

    /// Route a click on the overlay; only the close control and the backdrop
    /// dismiss.
    pub fn click(&mut self, target: ModalClick) -> Option<ScheduledRemoval> {
        match target {
            ModalClick::CloseControl | ModalClick::Backdrop => self.close(),
            ModalClick::Content => None,
        }
    }

    /// Leave the active state and schedule removal.
    ///
    /// Returns `None` when no overlay is present.
    pub fn close(&mut self) -> Option<ScheduledRemoval> {
        self.view.as_ref()?;
        self.active = false;

        let ticket = RemovalTicket(self.next_ticket);
        self.next_ticket += 1;
        let cancelled = self.pending.replace(ticket);
        tracing::debug!(?ticket, "Detail modal closing");

        Some(ScheduledRemoval { ticket, cancelled })
    }

    /// Remove the overlay if `ticket` is still the pending removal.
    pub fn remove(&mut self, ticket: RemovalTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.view = None;
        true
    }

    /// Overlay currently in the document
    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.view.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// CSS class of the overlay element
    pub fn overlay_class(&self) -> &'static str {
        if self.active {
            "modal-overlay active"
        } else {
            "modal-overlay"
        }
    }
}
