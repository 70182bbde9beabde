use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::{layouts, theme};

/// Status glyph in the top-right corner of `area`: a spinner while an
/// operation is in flight, then a check or cross for how the last one ended
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    let (_, corner) = layouts::title_with_loading(area);

    let (symbol, color) = match loading_state {
        LoadingState::NotStarted => return,
        LoadingState::Loading(throbber_state) => {
            let throbber = Throbber::default()
                .throbber_set(BRAILLE_EIGHT)
                .style(theme::loading_style());
            f.render_stateful_widget(throbber, corner, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => ("✓", theme::COLOR_SUCCESS),
        LoadingState::Error(_) => ("x", theme::COLOR_ERROR),
    };

    let indicator = Paragraph::new(Span::styled(symbol, Style::default().fg(color)))
        .alignment(Alignment::Right);

    f.render_widget(indicator, corner);
}
