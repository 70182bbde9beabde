use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::validators::{accepts_purchase_char, validate_purchase_amount};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits
    if event.is_ctrl('c') {
        return Some(AppCommand::Quit);
    }

    // Help popup swallows everything else
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // 'g' followed by 'g' -> oldest logs
            ('g', Key::Char('g')) if matches!(state.current_screen(), Screen::Logs(_)) => {
                Some(AppCommand::ScrollLogsToTop)
            }
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match state.current_screen() {
        Screen::Dashboard(dashboard) => handle_dashboard_keys(event, dashboard, state),
        Screen::Logs(_) => handle_logs_keys(key),
    }
}

fn handle_dashboard_keys(
    event: KeyEvent,
    dashboard: &DashboardState,
    state: &AppState,
) -> Option<AppCommand> {
    let key = event.key;

    if event.ctrl {
        return event.is_ctrl('r').then_some(AppCommand::LoadBalance);
    }

    match (dashboard.focus, key) {
        (_, Key::Tab | Key::Down) => Some(AppCommand::FocusNext),
        (_, Key::BackTab | Key::Up) => Some(AppCommand::FocusPrevious),

        // Purchase input: typing is disabled while a request is running
        (Focus::PurchaseInput, Key::Char(c)) if c.is_ascii_digit() || c == '.' => {
            if state.is_loading() || !accepts_purchase_char(&dashboard.purchase_input, c) {
                None
            } else {
                Some(AppCommand::AppendPurchaseChar(c))
            }
        }
        (Focus::PurchaseInput, Key::Backspace) => {
            if state.is_loading() || dashboard.purchase_input.is_empty() {
                None
            } else {
                Some(AppCommand::DeletePurchaseChar)
            }
        }
        (Focus::PurchaseInput, Key::Enter) => submit_purchase(dashboard, state),

        // Redeem button
        (Focus::RedeemButton, Key::Enter | Key::Char(' ')) => {
            if state.can_redeem() {
                Some(AppCommand::RedeemPoints {
                    points: REDEEM_POINTS,
                })
            } else {
                None
            }
        }

        (_, Key::Char('r')) => Some(AppCommand::LoadBalance),
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),
        (_, Key::Char('l')) => Some(AppCommand::NavigateToLogs),
        (_, Key::Esc) if state.feedback.is_some() => Some(AppCommand::DismissFeedback),

        _ => None,
    }
}

/// Invalid or empty amounts never reach the orchestration layer
fn submit_purchase(dashboard: &DashboardState, state: &AppState) -> Option<AppCommand> {
    if !state.can_submit_purchase() {
        return None;
    }

    match validate_purchase_amount(&dashboard.purchase_input) {
        Ok(amount) => Some(AppCommand::RecordPurchase { amount }),
        Err(reason) => {
            tracing::debug!("Not submitting purchase: {}", reason);
            None
        }
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Up | Key::Char('k') => Some(AppCommand::ScrollLogsUp),
        Key::Down | Key::Char('j') => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Char('G') => Some(AppCommand::ScrollLogsToBottom),
        Key::Char('g') => Some(AppCommand::SetPendingKey('g')),
        Key::Left | Key::Char('h') | Key::Esc => Some(AppCommand::NavigateBack),
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard_state(input: &str, focus: Focus, balance: u64) -> AppState {
        let mut state = AppState::new();
        state.balance = balance;
        state.loading = LoadingState::Loaded;
        if let Some(dashboard) = state.dashboard_mut() {
            dashboard.purchase_input = input.to_string();
            dashboard.focus = focus;
        }
        state
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    #[test]
    fn enter_submits_parsed_amount() {
        let state = dashboard_state("5000", Focus::PurchaseInput, 0);
        assert_eq!(
            press(&state, Key::Enter),
            Some(AppCommand::RecordPurchase { amount: 5000.0 })
        );
    }

    #[test]
    fn invalid_amounts_are_a_no_op() {
        for input in ["", "0", ".", "0.0"] {
            let state = dashboard_state(input, Focus::PurchaseInput, 0);
            assert_eq!(press(&state, Key::Enter), None, "input {:?}", input);
        }
    }

    #[test]
    fn nothing_submits_while_loading() {
        let mut state = dashboard_state("5000", Focus::PurchaseInput, 50);
        assert!(state.begin_operation(Operation::Refresh));

        assert_eq!(press(&state, Key::Enter), None);
        assert_eq!(press(&state, Key::Char('1')), None);

        if let Some(dashboard) = state.dashboard_mut() {
            dashboard.focus = Focus::RedeemButton;
        }
        assert_eq!(press(&state, Key::Enter), None);
    }

    #[test]
    fn redeem_requires_ten_points() {
        let poor = dashboard_state("", Focus::RedeemButton, 9);
        let rich = dashboard_state("", Focus::RedeemButton, 10);

        assert_eq!(press(&poor, Key::Enter), None);
        assert_eq!(
            press(&rich, Key::Enter),
            Some(AppCommand::RedeemPoints { points: 10 })
        );
    }

    #[test]
    fn digits_go_to_input_but_letters_are_commands() {
        let state = dashboard_state("12", Focus::PurchaseInput, 0);

        assert_eq!(
            press(&state, Key::Char('3')),
            Some(AppCommand::AppendPurchaseChar('3'))
        );
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::Quit));
        assert_eq!(press(&state, Key::Char('r')), Some(AppCommand::LoadBalance));
        assert_eq!(
            press(&state, Key::Backspace),
            Some(AppCommand::DeletePurchaseChar)
        );
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let state = dashboard_state("1.5", Focus::PurchaseInput, 0);
        assert_eq!(press(&state, Key::Char('.')), None);
    }

    #[test]
    fn ctrl_shortcuts() {
        let state = dashboard_state("", Focus::PurchaseInput, 0);

        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('r')), &state),
            Some(AppCommand::LoadBalance)
        );
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn esc_dismisses_feedback_only_when_present() {
        let mut state = dashboard_state("", Focus::PurchaseInput, 0);
        assert_eq!(press(&state, Key::Esc), None);

        state.feedback = Some(Feedback::success("Added 5 points"));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::DismissFeedback));
    }

    #[test]
    fn pending_g_sequences() {
        let mut state = dashboard_state("", Focus::PurchaseInput, 0);
        state.pending_key = Some('g');

        assert_eq!(
            press(&state, Key::Char('l')),
            Some(AppCommand::NavigateToLogs)
        );
        assert_eq!(
            press(&state, Key::Char('g')),
            Some(AppCommand::ClearPendingKey)
        );

        state.navigate_to(Screen::Logs(LogsState::default()));
        assert_eq!(
            press(&state, Key::Char('g')),
            Some(AppCommand::ScrollLogsToTop)
        );
    }
}
