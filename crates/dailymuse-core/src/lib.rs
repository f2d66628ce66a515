//! Daily Muse Core Library
//!
//! Everything behind the daily recommendations page that does not need a
//! renderer.
//!
//! ## Overview
//!
//! - [`types`]: items, categories and the day's [`Edition`]
//! - [`edition`]: reading the bundled or curated edition file
//! - [`view`]: card, grid and modal view models
//! - [`modal`], [`reveal`], [`cursor`], [`nav`]: the interactive state the
//!   desktop viewer owns at its root
//! - [`curator`]: turning a headline and the master library into an edition,
//!   and announcing it through the page meta tags, a feed and a social post
//!
//! ## Quick Start
//!
//! ```ignore
//! use dailymuse_core::{bundled_edition, grid_cards, Category};
//!
//! let edition = bundled_edition()?;
//! for category in Category::ALL {
//!     for card in grid_cards(edition.items(category), category.label()) {
//!         println!("{}: {}", card.title, card.context);
//!     }
//! }
//! ```

pub mod curator;
pub mod cursor;
pub mod date;
pub mod edition;
pub mod error;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod types;
pub mod view;

// Re-exports
pub use cursor::{CursorTrail, Point};
pub use date::{format_daily_date, today_label};
pub use edition::{bundled_edition, load_edition, previous_ids, save_edition};
pub use error::{MuseError, MuseResult};
pub use modal::{ModalClick, ModalSlot, RemovalTicket, ScheduledRemoval, CLOSE_DELAY};
pub use nav::{DockLink, DockState};
pub use reveal::{RevealState, RevealTracker, VISIBILITY_THRESHOLD};
pub use types::*;
pub use view::{grid_cards, CardView, ModalRequest, ModalView, CONTEXT_FALLBACK};
