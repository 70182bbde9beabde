use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::app_core::AppCore;
use crate::background::{data_loader::DataLoader, BackgroundDataHandler};
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::settings::Settings;
use crate::ui::screens::Screen;
use rewards_api::Client;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::new(5000);
        let logging = init_logging_with_buffer(log_buffer.clone())?;

        tracing::info!(
            "rewards starting (service: {}, log: {})",
            self.settings.base_url,
            logging.log_path.display()
        );

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let api_client = Arc::new(Client::new(&self.settings.base_url));
        let data_loader = DataLoader::new(api_client, data_tx);

        let mut core = AppCore::new(BackgroundDataHandler::new(data_loader));
        let mut event_stream = EventStream::new();

        core.mount();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        let result = loop {
            if let Screen::Logs(logs_state) = core.state_mut().current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            if let Err(e) = terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), &log_buffer);
            }) {
                break Err(e.into());
            }

            tokio::select! {
                _ = interval.tick() => {
                    core.tick();
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            // Don't log when on logs screen to avoid feedback loop
                            if !matches!(core.state().current_screen(), Screen::Logs(_)) {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            core.handle_key(KeyEvent::from(key));
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break Ok(());
            }
        };

        tracing::info!("Cleaning up application");
        core.handler_mut().shutdown();
        self.exit(terminal)?;

        result
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
