pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

use crate::app_core::DataEventHandler;
use crate::commands::executor;
use crate::events::AppCommand;
use crate::state::AppState;
use data_loader::DataLoader;

/// Tracks running request tasks so they can be torn down on exit
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a request task.
    ///
    /// Finished handles are pruned first. The executor never dispatches an
    /// operation while another is in flight, so a live task with the same ID
    /// is left to run to completion.
    pub fn spawn_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        if self.tasks.contains_key(&task_id) {
            tracing::warn!("Task {} is still running, not spawning another", task_id);
            return;
        }

        self.tasks.insert(task_id, tokio::spawn(future));
    }

    pub fn running(&self) -> usize {
        self.tasks
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Production handler: commands that talk to the service run as tokio tasks
pub struct BackgroundDataHandler {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader,
}

impl BackgroundDataHandler {
    pub fn new(data_loader: DataLoader) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            data_loader,
        }
    }

    pub fn shutdown(&mut self) {
        self.task_manager.cancel_all();
    }
}

impl DataEventHandler for BackgroundDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.data_loader);
    }
}
