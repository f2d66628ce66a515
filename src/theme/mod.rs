//! Theme for the Daily Muse viewer.

mod styles;

pub use styles::GLOBAL_STYLES;
