//! Page components for Daily Muse.

mod today;

pub use today::Today;
