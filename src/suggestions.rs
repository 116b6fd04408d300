//! Suggestion pills: popular flowers offered below the input, filtered by
//! fuzzy match as the user types.

mod suggestion_state;
pub mod suggestion_render;

pub use suggestion_state::{POPULAR_FLOWERS, SuggestionState};
