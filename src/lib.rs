//! flowercheck library - Pet-safe flower checker
//!
//! This library exposes the core functionality of flowercheck for testing purposes.

pub mod app;
pub mod check;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod notification;
pub mod recent;
pub mod results;
pub mod suggestions;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use check::{QueryClient, QueryError, Verdict};
pub use config::Config;
pub use error::FlowerCheckError;
pub use recent::RecentChecksCache;
