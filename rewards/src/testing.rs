use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor::{self, Dispatch};
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through `execute_command_sync`, so state changes apply exactly
/// as in production; the requests they would have started are recorded instead
/// of sent. Tests answer them by injecting `DataEvent`s.
#[derive(Debug, Default)]
pub struct MockDataHandler {
    dispatched: Vec<Dispatch>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests started so far, oldest first
    pub fn dispatched(&self) -> &[Dispatch] {
        &self.dispatched
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(dispatch) = executor::execute_command_sync(command, state) {
            self.dispatched.push(dispatch);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a mounted test app; the initial balance load is already dispatched
    pub fn new() -> Self {
        let mut core = AppCore::new(MockDataHandler::new());
        core.mount();
        Self { core }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with Ctrl state
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into whatever has focus
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Inject a sequence of data events in order
    pub fn send_data_events(&mut self, events: impl IntoIterator<Item = DataEvent>) {
        for event in events {
            self.send_data_event(event);
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Requests the app has started, oldest first
    pub fn dispatched(&mut self) -> &[Dispatch] {
        self.core.handler_mut().dispatched()
    }

    /// The most recently started request
    pub fn last_dispatch(&mut self) -> Option<Dispatch> {
        self.dispatched().last().copied()
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
