use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{components::help_bar, layouts, theme};

const LOGS_HINTS: &[help_bar::Hint] = &[
    ("j/k", "scroll"),
    ("G", "bottom"),
    ("gg", "top"),
    ("PgUp/PgDn", "page"),
    ("h/Esc", "dashboard"),
    ("?", "help"),
];

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    render_title(f, title_area, state);
    render_logs(f, content_area, state, log_buffer);
    render_help(f, help_area, state);
}

fn render_title(f: &mut Frame, area: Rect, state: &LogsState) {
    let title = format!("Logs ({} entries)", state.total_entries);
    let paragraph = Paragraph::new(title).style(theme::title_style());
    f.render_widget(paragraph, area);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.get_entries();
    let total = entries.len();

    if total == 0 {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No logs yet", theme::loading_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Requests to the rewards service are logged here",
                theme::help_text_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Session Logs"));
        f.render_widget(placeholder, area);
        return;
    }

    // Calculate visible window (scrolling from bottom, newest at bottom)
    let inner_height = area.height.saturating_sub(2) as usize; // Account for borders
    let start = total.saturating_sub(state.scroll_offset + inner_height);
    let end = total.saturating_sub(state.scroll_offset);

    let rows: Vec<Row> = entries[start..end]
        .iter()
        .map(|entry| {
            let level_style = match entry.level {
                Level::ERROR => Style::default()
                    .fg(theme::COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
                Level::WARN => Style::default().fg(theme::COLOR_LOADING),
                Level::INFO => Style::default().fg(theme::COLOR_SUCCESS),
                Level::DEBUG => Style::default().fg(Color::Blue),
                Level::TRACE => Style::default().fg(theme::COLOR_MUTED),
            };

            let level_str = match entry.level {
                Level::ERROR => "ERROR",
                Level::WARN => "WARN ",
                Level::INFO => "INFO ",
                Level::DEBUG => "DEBUG",
                Level::TRACE => "TRACE",
            };

            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                level_str.to_string(),
                truncate_target(&entry.target, 25),
                entry.message.clone(),
            ])
            .style(level_style)
        })
        .collect();

    let widths = [
        Constraint::Length(12), // Time
        Constraint::Length(5),  // Level
        Constraint::Length(25), // Target
        Constraint::Min(30),    // Message
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            start + 1,
            end,
            total
        )))
        .header(
            Row::new(vec!["Time", "Level", "Target", "Message"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState) {
    let scroll_info = (state.scroll_offset > 0)
        .then(|| format!("scrolled {} from bottom", state.scroll_offset));

    help_bar::render_help_bar(f, area, LOGS_HINTS, scroll_info.as_deref());
}

/// Keep the tail of a module path, which is the part that tells modules apart
fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_buffer::LogEntry;
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn truncates_long_targets_from_the_left() {
        assert_eq!(truncate_target("rewards::app", 25), "rewards::app");
        assert_eq!(
            truncate_target("rewards::background::data_loader", 20),
            "...ound::data_loader"
        );
    }

    #[test]
    fn empty_buffer_shows_placeholder() {
        let buffer = LogBuffer::new(10);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render(f, &LogsState::default(), &buffer))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("No logs yet"));
        assert!(screen.contains("h/Esc: dashboard"));
    }

    #[test]
    fn renders_buffered_entries() {
        let buffer = LogBuffer::new(10);
        buffer.push(LogEntry {
            timestamp: Local::now(),
            level: Level::INFO,
            target: "rewards::app".to_string(),
            message: "Points redeemed".to_string(),
        });
        let state = LogsState {
            scroll_offset: 0,
            total_entries: buffer.len(),
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &state, &buffer)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Logs (1 entries)"));
        assert!(screen.contains("Points redeemed"));
    }
}
