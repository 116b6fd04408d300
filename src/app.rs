mod app_events;
mod app_render;
mod app_state;
mod check_state;


// Re-export public types
pub use app_state::App;
pub use check_state::{CheckState, CheckStatus};
