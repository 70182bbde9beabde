pub mod reducer;
pub mod validators;

use crate::events::ActionError;
use crate::ui::screens::Screen;
use crate::ui::utils::fmt_points;
use rewards_api::endpoints::balance::Reward;
use throbber_widgets_tui::ThrobberState;

/// Points spent by the redeem button
pub const REDEEM_POINTS: u64 = 10;

/// Shown when a request failed without a usable error body
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected connection error occurred.";

/// Shown when the service sent an error body with an empty message
pub const API_ERROR_FALLBACK: &str = "API Error occurred";

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// A single request/refresh round trip against the rewards service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Refresh,
    Purchase,
    Redeem,
}

impl Operation {
    pub fn task_id(&self) -> &'static str {
        match self {
            Self::Refresh => "load_balance",
            Self::Purchase => "record_purchase",
            Self::Redeem => "redeem_points",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Transient notification from the last action; replaced by the next one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Error,
        }
    }

    /// Map a failed request onto the message the user sees
    pub fn from_error(error: &ActionError) -> Self {
        match error {
            ActionError::Api { message, .. } if message.is_empty() => {
                Self::error(API_ERROR_FALLBACK)
            }
            ActionError::Api { message, .. } => Self::error(message.clone()),
            ActionError::Connection(_) => Self::error(GENERIC_ERROR_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

/// Which dashboard control receives Enter and typed characters
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    PurchaseInput,
    RedeemButton,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::PurchaseInput => Self::RedeemButton,
            Self::RedeemButton => Self::PurchaseInput,
        }
    }

    pub fn previous(&self) -> Self {
        // Two controls, so both directions toggle
        self.next()
    }
}

#[derive(Default, Debug, Clone)]
pub struct DashboardState {
    /// Raw purchase amount as typed
    pub purchase_input: String,
    pub focus: Focus,
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

/// The single state container of the dashboard.
///
/// Mutated only by the command executor and the data event reducer; rendering
/// gets a shared reference.
#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // Rewards data
    pub balance: u64,
    pub reward: Option<Reward>,
    pub loading: LoadingState,
    pub in_flight: Option<Operation>,
    pub feedback: Option<Feedback>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Dashboard(DashboardState::default())],

            balance: 0,
            reward: None,
            loading: LoadingState::NotStarted,
            in_flight: None,
            feedback: None,

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// The dashboard sits at the root of the navigation stack
    pub fn dashboard(&self) -> Option<&DashboardState> {
        match self.history.first() {
            Some(Screen::Dashboard(dashboard)) => Some(dashboard),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match self.history.first_mut() {
            Some(Screen::Dashboard(dashboard)) => Some(dashboard),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.loading, LoadingState::Loading(..))
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.loading {
            LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
            _ => None,
        }
    }

    /// Mark `operation` as in flight. Returns false if another one still is.
    pub fn begin_operation(&mut self, operation: Operation) -> bool {
        if let Some(current) = self.in_flight {
            tracing::debug!("Ignoring {:?} while {:?} is in flight", operation, current);
            return false;
        }
        self.in_flight = Some(operation);
        self.loading = LoadingState::Loading(ThrobberState::default());
        true
    }

    /// Balance text for the hero card: a placeholder until the first load lands
    pub fn balance_display(&self) -> String {
        if self.is_loading() && self.balance == 0 {
            "...".to_string()
        } else {
            fmt_points(self.balance)
        }
    }

    pub fn purchase_input(&self) -> &str {
        self.dashboard()
            .map(|dashboard| dashboard.purchase_input.as_str())
            .unwrap_or_default()
    }

    pub fn focus(&self) -> Focus {
        self.dashboard()
            .map(|dashboard| dashboard.focus)
            .unwrap_or_default()
    }

    pub fn can_submit_purchase(&self) -> bool {
        !self.is_loading() && !self.purchase_input().is_empty()
    }

    pub fn can_redeem(&self) -> bool {
        !self.is_loading() && self.balance >= REDEEM_POINTS
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
