//! Bento grid and its cards

mod bento_card;
mod bento_grid;

pub use bento_card::BentoCard;
pub use bento_grid::BentoGrid;
