use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::validators::accepts_purchase_char;
use crate::state::*;
use crate::ui::screens::Screen;

const LOG_PAGE_SIZE: usize = 20;

/// Network work a command asks for once its state changes are applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch {
    LoadBalance,
    RecordPurchase { amount: f64 },
    RedeemPoints { points: u64 },
}

impl Dispatch {
    pub fn operation(&self) -> Operation {
        match self {
            Self::LoadBalance => Operation::Refresh,
            Self::RecordPurchase { .. } => Operation::Purchase,
            Self::RedeemPoints { .. } => Operation::Redeem,
        }
    }
}

/// Execute a command: apply its state changes and spawn the request it needs
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let Some(dispatch) = apply_command(command, state) else {
        return;
    };

    let data_loader = data_loader.clone();
    let task_id = dispatch.operation().task_id().to_string();
    match dispatch {
        Dispatch::LoadBalance => {
            task_manager.spawn_task(task_id, async move {
                data_loader.load_balance().await;
            });
        }
        Dispatch::RecordPurchase { amount } => {
            task_manager.spawn_task(task_id, async move {
                data_loader.add_points(amount).await;
            });
        }
        Dispatch::RedeemPoints { points } => {
            task_manager.spawn_task(task_id, async move {
                data_loader.redeem(points).await;
            });
        }
    }
}

/// Execute a command synchronously without spawning tasks (tests)
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<Dispatch> {
    apply_command(command, state)
}

/// Apply the state side of a command.
///
/// Returns the request to run, if any. Rewards actions are refused while
/// another operation is in flight, so mutations never overlap.
fn apply_command(command: AppCommand, state: &mut AppState) -> Option<Dispatch> {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let dispatch = match command {
        AppCommand::LoadBalance => {
            if state.begin_operation(Operation::Refresh) {
                Some(Dispatch::LoadBalance)
            } else {
                None
            }
        }

        AppCommand::RecordPurchase { amount } => {
            if !amount.is_finite() || amount <= 0.0 {
                tracing::warn!("Refusing to record purchase of {}", amount);
                None
            } else if state.begin_operation(Operation::Purchase) {
                state.feedback = None;
                Some(Dispatch::RecordPurchase { amount })
            } else {
                None
            }
        }

        AppCommand::RedeemPoints { points } => {
            if points == 0 {
                tracing::warn!("Refusing to redeem zero points");
                None
            } else if state.begin_operation(Operation::Redeem) {
                state.feedback = None;
                Some(Dispatch::RedeemPoints { points })
            } else {
                None
            }
        }

        AppCommand::AppendPurchaseChar(c) => {
            if let Some(dashboard) = state.dashboard_mut() {
                if accepts_purchase_char(&dashboard.purchase_input, c) {
                    dashboard.purchase_input.push(c);
                }
            }
            None
        }

        AppCommand::DeletePurchaseChar => {
            if let Some(dashboard) = state.dashboard_mut() {
                dashboard.purchase_input.pop();
            }
            None
        }

        AppCommand::FocusNext => {
            if let Screen::Dashboard(dashboard) = state.current_screen_mut() {
                dashboard.focus = dashboard.focus.next();
            }
            None
        }

        AppCommand::FocusPrevious => {
            if let Screen::Dashboard(dashboard) = state.current_screen_mut() {
                dashboard.focus = dashboard.focus.previous();
            }
            None
        }

        AppCommand::DismissFeedback => {
            state.feedback = None;
            None
        }

        AppCommand::NavigateBack => {
            state.navigate_back();
            None
        }

        AppCommand::NavigateToLogs => {
            // No logging here, the Logs screen would show its own navigation
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
            None
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }

        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Up goes back in time (larger offset from the bottom)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
            None
        }

        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
            None
        }

        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
            None
        }

        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
            None
        }

        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
            None
        }

        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
            None
        }

        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }

        AppCommand::ClearPendingKey => {
            state.pending_key = None;
            None
        }

        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
    };

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    dispatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state(balance: u64) -> AppState {
        let mut state = AppState::new();
        state.balance = balance;
        state.loading = LoadingState::Loaded;
        state
    }

    #[test]
    fn purchase_sets_loading_and_clears_feedback() {
        let mut state = loaded_state(25);
        state.feedback = Some(Feedback::error("old"));

        let dispatch = apply_command(AppCommand::RecordPurchase { amount: 5000.0 }, &mut state);

        assert_eq!(dispatch, Some(Dispatch::RecordPurchase { amount: 5000.0 }));
        assert!(state.is_loading());
        assert_eq!(state.in_flight, Some(Operation::Purchase));
        assert_eq!(state.feedback, None);
    }

    #[test]
    fn load_balance_keeps_feedback() {
        let mut state = loaded_state(25);
        state.feedback = Some(Feedback::success("Added 5 points"));

        let dispatch = apply_command(AppCommand::LoadBalance, &mut state);

        assert_eq!(dispatch, Some(Dispatch::LoadBalance));
        assert!(state.feedback.is_some());
    }

    #[test]
    fn second_action_is_refused_while_one_is_in_flight() {
        let mut state = loaded_state(25);

        assert!(apply_command(AppCommand::RedeemPoints { points: 10 }, &mut state).is_some());
        assert_eq!(
            apply_command(AppCommand::RecordPurchase { amount: 10.0 }, &mut state),
            None
        );
        assert_eq!(apply_command(AppCommand::LoadBalance, &mut state), None);
        assert_eq!(state.in_flight, Some(Operation::Redeem));
    }

    #[test]
    fn invalid_amounts_and_zero_points_never_dispatch() {
        let mut state = loaded_state(25);

        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                apply_command(AppCommand::RecordPurchase { amount }, &mut state),
                None
            );
        }
        assert_eq!(
            apply_command(AppCommand::RedeemPoints { points: 0 }, &mut state),
            None
        );
        assert!(!state.is_loading());
        assert_eq!(state.in_flight, None);
    }

    #[test]
    fn editing_purchase_input() {
        let mut state = loaded_state(0);

        for c in ['1', '.', '5', '.'] {
            apply_command(AppCommand::AppendPurchaseChar(c), &mut state);
        }
        assert_eq!(state.purchase_input(), "1.5");

        apply_command(AppCommand::DeletePurchaseChar, &mut state);
        assert_eq!(state.purchase_input(), "1.");
    }

    #[test]
    fn focus_cycles_between_controls() {
        let mut state = loaded_state(0);
        assert_eq!(state.focus(), Focus::PurchaseInput);

        apply_command(AppCommand::FocusNext, &mut state);
        assert_eq!(state.focus(), Focus::RedeemButton);

        apply_command(AppCommand::FocusPrevious, &mut state);
        assert_eq!(state.focus(), Focus::PurchaseInput);
    }

    #[test]
    fn log_scrolling_is_bounded() {
        let mut state = loaded_state(0);
        apply_command(AppCommand::NavigateToLogs, &mut state);
        if let Screen::Logs(s) = state.current_screen_mut() {
            s.total_entries = 30;
        }

        apply_command(AppCommand::ScrollLogsPageUp, &mut state);
        apply_command(AppCommand::ScrollLogsPageUp, &mut state);
        match state.current_screen() {
            Screen::Logs(s) => assert_eq!(s.scroll_offset, 29),
            other => panic!("expected logs screen, got {:?}", other),
        }

        apply_command(AppCommand::ScrollLogsToBottom, &mut state);
        match state.current_screen() {
            Screen::Logs(s) => assert_eq!(s.scroll_offset, 0),
            other => panic!("expected logs screen, got {:?}", other),
        }

        apply_command(AppCommand::NavigateBack, &mut state);
        assert!(matches!(state.current_screen(), Screen::Dashboard(_)));
    }
}
