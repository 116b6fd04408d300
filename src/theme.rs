//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Bouquet - rose and leaf accents on a dark soil background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(238, 232, 228);
    pub const TEXT_DIM: Color = Color::Rgb(104, 96, 92);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 140, 134);

    // Background colors
    pub const BG_SURFACE: Color = Color::Rgb(44, 36, 38);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(70, 52, 58);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(120, 200, 120);
    pub const WARNING: Color = Color::Rgb(240, 196, 80);
    pub const ERROR: Color = Color::Rgb(230, 100, 110);

    // Accent colors
    pub const ROSE: Color = Color::Rgb(232, 86, 120);
    pub const PINK: Color = Color::Rgb(255, 160, 190);
    pub const CREAM: Color = Color::Rgb(255, 240, 220);
    pub const LEAF: Color = Color::Rgb(120, 200, 120);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Header banner styles
pub mod header {
    use super::*;

    pub const TITLE: Color = palette::ROSE;
    pub const ICON: Color = palette::LEAF;
    pub const SUBTITLE: Color = palette::TEXT_MUTED;
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::PINK;
    pub const BORDER_LOADING: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::ROSE;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;

    pub const CURSOR: Style = palette::CURSOR;
}

/// Suggestion pill styles
pub mod suggestions {
    use super::*;

    pub const PILL: Color = palette::TEXT_MUTED;
    pub const PILL_BG: Color = palette::BG_SURFACE;
    pub const SELECTED_FG: Color = palette::CREAM;
    pub const SELECTED_BG: Color = palette::ROSE;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Verdict / error result area styles
pub mod results {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const SAFE: Color = palette::SUCCESS;
    pub const UNSAFE: Color = palette::WARNING;
    pub const MESSAGE: Color = palette::TEXT;
    pub const NOTE: Color = palette::WARNING;
    pub const SOURCE: Color = palette::TEXT_MUTED;
    pub const AI_MARKER: Color = palette::WARNING;
    pub const LOADING: Color = palette::PINK;
    pub const IDLE: Color = palette::TEXT_DIM;

    pub const ERROR_FG: Color = palette::ERROR;
    pub const ERROR_BORDER: Color = palette::ERROR;
}

/// Recent checks line styles
pub mod recent {
    use super::*;

    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const ENTRY: Color = palette::TEXT;
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::PINK;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Notification toast styles
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_HIGHLIGHT;
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = Color::Black;
    pub const WARNING_BG: Color = palette::WARNING;
    pub const WARNING_BORDER: Color = palette::WARNING;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = palette::ERROR;
    pub const ERROR_BORDER: Color = palette::ERROR;
}
