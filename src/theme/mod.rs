//! Visual theme for Pagewright.

mod styles;

pub use styles::GLOBAL_STYLES;
