//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all screens and components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Color for success feedback
pub const COLOR_SUCCESS: Color = Color::Green;

/// Color for error feedback
pub const COLOR_ERROR: Color = Color::Red;

/// Color for muted/trace information
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Color for table headers and key names
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Color of the balance figure
pub const COLOR_BALANCE: Color = Color::Magenta;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Border color for the focused control
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Background for enabled buttons
pub const COLOR_BUTTON_BG: Color = Color::Blue;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the dashboard header (title + subtitle)
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the balance hero card
pub const HERO_HEIGHT: u16 = 7;

/// Height of the purchase/redeem cards
pub const CARD_HEIGHT: u16 = 9;

/// Height of the feedback banner
pub const FEEDBACK_HEIGHT: u16 = 3;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Style for the big balance number
pub fn balance_style() -> Style {
    Style::default()
        .fg(COLOR_BALANCE)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Border style for a card, highlighted when its control has focus
pub fn card_border_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(COLOR_INPUT_FOCUSED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Buttons render dimmed when disabled
pub fn button_style(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Style::default().fg(COLOR_MUTED),
        (true, true) => Style::default()
            .fg(Color::White)
            .bg(COLOR_BUTTON_BG)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White).bg(COLOR_BUTTON_BG),
    }
}

/// Style for the feedback banner
pub fn feedback_style(success: bool) -> Style {
    let color = if success { COLOR_SUCCESS } else { COLOR_ERROR };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
