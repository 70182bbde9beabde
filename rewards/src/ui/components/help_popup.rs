use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = help_items(screen);

    let (width, height) = layouts::HELP_POPUP_SIZE;
    let area = layouts::centered_popup(width, height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help (press ? or Esc to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Dashboard(..) => {
            items.push(("Tab/↓", "Focus next control"));
            items.push(("Shift-Tab/↑", "Focus previous control"));
            items.push(("0-9 .", "Type a purchase amount"));
            items.push(("Backspace", "Delete last character"));
            items.push(("Enter", "Add points / redeem points"));
            items.push(("Ctrl+R / r", "Reload balance"));
            items.push(("Esc", "Dismiss message"));
            items.push(("l", "Open session logs"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
            items.push(("h/Esc", "Back to dashboard"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("g then l", "Go to logs"));
    items.push(("?", "Toggle this help"));
    items.push(("q / Ctrl+C", "Quit application"));

    items
}
