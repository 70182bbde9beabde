//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    CARD_HEIGHT, FEEDBACK_HEIGHT, HEADER_HEIGHT, HELP_BAR_HEIGHT, HERO_HEIGHT, SCREEN_MARGIN,
    TITLE_HEIGHT,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Regions of the dashboard, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub header: Rect,
    pub hero: Rect,
    pub purchase: Rect,
    pub redeem: Rect,
    pub feedback: Rect,
    pub help: Rect,
}

/// Header, balance hero, the two action cards side by side, feedback, help bar
pub fn dashboard_layout(area: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(FEEDBACK_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    DashboardAreas {
        header: rows[0],
        hero: rows[1],
        purchase: cards[0],
        redeem: cards[1],
        feedback: rows[3],
        help: rows[5],
    }
}

/// One-column strip on the right edge of `area`, for the status glyph.
///
/// Returns (rest, corner)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Help overlay size as (width %, height %)
pub const HELP_POPUP_SIZE: (u16, u16) = (80, 80);
