use chrono::Utc;
use rewards::commands::executor::Dispatch;
use rewards::events::{ActionError, DataEvent};
use rewards::input::{Key, KeyEvent};
use rewards::state::{FeedbackKind, LoadingState, Operation, GENERIC_ERROR_MESSAGE};
use rewards::testing::TestApp;
use rewards::ui::screens::Screen;
use rewards_api::endpoints::{balance::Reward, purchase::PurchaseResponse, redeem::RedeemResponse};

fn reward(total_points: u64) -> Reward {
    Reward {
        username: Some("ana".to_string()),
        total_points,
        updated_at: Utc::now(),
        transactions: None,
    }
}

fn finished(operation: Operation, succeeded: bool) -> DataEvent {
    DataEvent::OperationFinished {
        operation,
        succeeded,
    }
}

/// Mounted app whose initial load returned `points`
fn loaded_app(points: u64) -> TestApp {
    let mut app = TestApp::new();
    app.send_data_events([
        DataEvent::BalanceLoaded {
            reward: reward(points),
        },
        finished(Operation::Refresh, true),
    ]);
    app
}

#[test]
fn test_mount_loads_balance() {
    let mut app = TestApp::new();

    assert_eq!(app.dispatched(), &[Dispatch::LoadBalance]);
    assert!(app.state().is_loading());
    assert_eq!(app.state().balance_display(), "...");

    app.send_data_events([
        DataEvent::BalanceLoaded {
            reward: reward(25),
        },
        finished(Operation::Refresh, true),
    ]);

    assert_eq!(app.state().balance, 25);
    assert_eq!(app.state().balance_display(), "25");
    assert!(!app.state().is_loading());
    assert!(app.state().feedback.is_none());
}

#[test]
fn test_purchase_flow() {
    let mut app = loaded_app(25);

    app.type_str("5000");
    assert_eq!(app.state().purchase_input(), "5000");

    app.send_key(Key::Enter);
    assert_eq!(
        app.last_dispatch(),
        Some(Dispatch::RecordPurchase { amount: 5000.0 })
    );
    assert!(app.state().is_loading());
    assert!(!app.state().can_submit_purchase());

    app.send_data_event(DataEvent::PurchaseRecorded {
        response: PurchaseResponse {
            message: "Added 5 points".to_string(),
            new_balance: 30,
            amount_processed: Some(5000.0),
        },
    });
    // Still loading until the follow-up refresh lands
    assert!(app.state().is_loading());
    assert_eq!(app.state().balance, 25);

    app.send_data_events([
        DataEvent::BalanceLoaded {
            reward: reward(30),
        },
        finished(Operation::Purchase, true),
    ]);

    let state = app.state();
    assert_eq!(state.balance, 30);
    assert!(!state.is_loading());
    assert_eq!(state.purchase_input(), "");
    let feedback = state.feedback.as_ref().expect("success feedback");
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert_eq!(feedback.message, "Added 5 points");
}

#[test]
fn test_failed_redeem_keeps_balance() {
    let mut app = loaded_app(30);

    app.send_key(Key::Tab);
    app.send_key(Key::Enter);
    assert_eq!(app.last_dispatch(), Some(Dispatch::RedeemPoints { points: 10 }));

    app.send_data_events([
        DataEvent::RedeemFailed {
            error: ActionError::Api {
                message: "Insufficient points".to_string(),
                code: Some("INSUFFICIENT_POINTS".to_string()),
            },
        },
        finished(Operation::Redeem, false),
    ]);

    let state = app.state();
    assert_eq!(state.balance, 30);
    assert_eq!(
        state.loading,
        LoadingState::Error("Insufficient points".to_string())
    );
    let feedback = state.feedback.as_ref().expect("error feedback");
    assert_eq!(feedback.kind, FeedbackKind::Error);
    assert_eq!(feedback.message, "Insufficient points");
}

#[test]
fn test_successful_redeem_refreshes_balance() {
    let mut app = loaded_app(30);

    app.send_keys(&[Key::Tab, Key::Enter]);
    app.send_data_events([
        DataEvent::PointsRedeemed {
            response: RedeemResponse {
                message: "Redeemed 10 points".to_string(),
                new_balance: 20,
                points_redeemed: Some(10),
            },
        },
        DataEvent::BalanceLoaded {
            reward: reward(20),
        },
        finished(Operation::Redeem, true),
    ]);

    assert_eq!(app.state().balance, 20);
    assert_eq!(
        app.state().feedback.as_ref().map(|f| f.message.as_str()),
        Some("Redeemed 10 points")
    );
}

#[test]
fn test_redeem_disabled_below_minimum() {
    let mut app = loaded_app(9);

    app.send_keys(&[Key::Tab, Key::Enter]);

    assert!(!app.state().can_redeem());
    assert_eq!(app.dispatched(), &[Dispatch::LoadBalance]);
    assert!(!app.state().is_loading());
}

#[test]
fn test_connection_error_uses_generic_message() {
    let mut app = loaded_app(30);

    app.type_str("1000");
    app.send_key(Key::Enter);
    app.send_data_events([
        DataEvent::PurchaseFailed {
            error: ActionError::Connection("connection refused".to_string()),
        },
        finished(Operation::Purchase, false),
    ]);

    assert_eq!(
        app.state().feedback.as_ref().map(|f| f.message.as_str()),
        Some(GENERIC_ERROR_MESSAGE)
    );
    assert_eq!(app.state().balance, 30);
}

#[test]
fn test_actions_refused_while_in_flight() {
    let mut app = TestApp::new();

    // Initial load still running
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('r')));
    app.type_str("5000");
    app.send_key(Key::Enter);

    assert_eq!(app.dispatched(), &[Dispatch::LoadBalance]);
    assert_eq!(app.state().purchase_input(), "");
}

#[test]
fn test_invalid_purchase_is_a_no_op() {
    let mut app = loaded_app(30);

    app.send_key(Key::Enter);
    app.type_str(".");
    app.send_key(Key::Enter);

    assert_eq!(app.dispatched(), &[Dispatch::LoadBalance]);
    assert!(!app.state().is_loading());
}

#[test]
fn test_second_decimal_point_is_ignored() {
    let mut app = loaded_app(0);

    app.type_str("12.5.0");

    assert_eq!(app.state().purchase_input(), "12.50");
}

#[test]
fn test_reload_keeps_feedback() {
    let mut app = loaded_app(30);
    app.send_keys(&[Key::Tab, Key::Enter]);
    app.send_data_events([
        DataEvent::RedeemFailed {
            error: ActionError::Api {
                message: "Insufficient points".to_string(),
                code: None,
            },
        },
        finished(Operation::Redeem, false),
    ]);

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('r')));

    assert_eq!(app.last_dispatch(), Some(Dispatch::LoadBalance));
    assert!(app.state().feedback.is_some());

    app.send_key(Key::Esc);
    assert!(app.state().feedback.is_none());
}

#[test]
fn test_logs_navigation() {
    let mut app = loaded_app(30);

    app.send_key(Key::Char('l'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Logs(Default::default())));

    app.send_key(Key::Char('h'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Dashboard(
        Default::default(),
    )));

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.assert_screen_type(std::mem::discriminant(&Screen::Logs(Default::default())));

    app.send_key(Key::Esc);
    app.assert_screen_type(std::mem::discriminant(&Screen::Dashboard(
        Default::default(),
    )));
}

#[test]
fn test_help_toggle() {
    let mut app = loaded_app(30);

    assert!(!app.state().help_visible);
    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Keys other than ?, Esc and q are swallowed while help is open
    app.send_key(Key::Char('l'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Dashboard(
        Default::default(),
    )));

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let mut app = loaded_app(30);
    app.type_str("12");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));

    app.assert_should_quit();
}
