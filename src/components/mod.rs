//! UI Components for Daily Muse.
//!
//! Gallery-style page pieces: grid, modal, dock and cursor.

mod cursor_follower;
mod detail_modal;
mod dock_nav;
pub mod grid;
mod hero;

pub use cursor_follower::CursorFollower;
pub use detail_modal::DetailModal;
pub use dock_nav::DockNav;
pub use grid::{BentoCard, BentoGrid};
pub use hero::Hero;
