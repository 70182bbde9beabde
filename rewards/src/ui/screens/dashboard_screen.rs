use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, DashboardState, Focus, REDEEM_POINTS};
use crate::ui::{
    components::{feedback_banner, help_bar, loading_indicator},
    layouts, theme, utils,
};

const PURCHASE_PLACEHOLDER: &str = "Amount ($)";
const PROCESSING_LABEL: &str = "Processing...";

const DASHBOARD_HINTS: &[help_bar::Hint] = &[
    ("Tab", "focus"),
    ("Enter", "submit"),
    ("Ctrl+R", "reload"),
    ("l", "logs"),
    ("?", "help"),
    ("q", "quit"),
];

pub fn render(f: &mut Frame, dashboard: &DashboardState, state: &AppState) {
    let areas = layouts::dashboard_layout(f.area());

    render_header(f, areas.header, state);
    render_hero(f, areas.hero, state);
    render_purchase_card(f, areas.purchase, dashboard, state);
    render_redeem_card(f, areas.redeem, dashboard, state);

    if let Some(feedback) = &state.feedback {
        feedback_banner::render_feedback_banner(f, areas.feedback, feedback);
    }

    help_bar::render_help_bar(f, areas.help, DASHBOARD_HINTS, None);
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(Span::styled("Loyalty Rewards", theme::title_style())),
        Line::from(Span::styled(
            "Accumulate points and get incredible benefits.",
            theme::help_text_style(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);

    loading_indicator::render_loading_indicator(f, area, &state.loading);
}

fn render_hero(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(state.balance_display(), theme::balance_style()),
            Span::raw(" Points"),
        ]),
    ];

    if let Some(reward) = &state.reward {
        lines.push(Line::from(""));
        let updated = format!("Updated {}", utils::fmt_updated_at(&reward.updated_at));
        let details = match &reward.username {
            Some(username) => format!("{} · {}", username, updated),
            None => updated,
        };
        lines.push(Line::from(Span::styled(details, theme::help_text_style())));
    }

    let hero = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Balance ")
            .title_alignment(Alignment::Center)
            .border_style(theme::accent_border_style()),
    );

    f.render_widget(hero, area);
}

fn render_purchase_card(f: &mut Frame, area: Rect, dashboard: &DashboardState, state: &AppState) {
    let focused = dashboard.focus == Focus::PurchaseInput;

    let input = if dashboard.purchase_input.is_empty() {
        Span::styled(PURCHASE_PLACEHOLDER, Style::default().fg(theme::COLOR_MUTED))
    } else {
        Span::raw(dashboard.purchase_input.clone())
    };
    let mut input_line = vec![Span::raw("$ "), input];
    if focused {
        input_line.push(Span::styled("_", theme::loading_style()));
    }

    let label = if state.is_loading() {
        PROCESSING_LABEL
    } else {
        "Add Points"
    };

    let lines = vec![
        Line::from(""),
        Line::from(input_line),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", label),
            theme::button_style(state.can_submit_purchase(), focused),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Earn 1 point for every $1,000 spent.",
            theme::help_text_style(),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Earn Points ")
                .border_style(theme::card_border_style(focused)),
        );

    f.render_widget(card, area);
}

fn render_redeem_card(f: &mut Frame, area: Rect, dashboard: &DashboardState, state: &AppState) {
    let focused = dashboard.focus == Focus::RedeemButton;

    let label = if state.is_loading() {
        PROCESSING_LABEL.to_string()
    } else {
        format!("Redeem {} Pts", REDEEM_POINTS)
    };

    let hint_style = if state.balance < REDEEM_POINTS {
        Style::default().fg(theme::COLOR_ERROR)
    } else {
        theme::help_text_style()
    };

    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "Redeem {} points for special discounts!",
            REDEEM_POINTS
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", label),
            theme::button_style(state.can_redeem(), focused),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Minimum points required: {}", REDEEM_POINTS),
            hint_style,
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Redeem ")
                .border_style(theme::card_border_style(focused)),
        );

    f.render_widget(card, area);
}
