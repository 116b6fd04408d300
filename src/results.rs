//! Result area: the current verdict, the inline error, or the loading state.

pub mod results_render;
mod verdict_text;

pub use verdict_text::format_verdict;
