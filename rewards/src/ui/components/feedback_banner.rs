//! Banner showing the outcome of the last purchase or redemption.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Feedback;
use crate::ui::theme;

pub fn render_feedback_banner(f: &mut Frame, area: Rect, feedback: &Feedback) {
    let success = feedback.is_success();
    let icon = if success { "✅" } else { "❌" };

    let banner = Paragraph::new(format!("{} {}", icon, feedback.message))
        .style(theme::feedback_style(success))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::feedback_style(success)),
        );

    f.render_widget(banner, area);
}
