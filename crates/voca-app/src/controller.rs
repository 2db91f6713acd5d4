use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use voca_generator::Generator;
use voca_store::{TableConnector, VocabStore};
use voca_types::AppEvent;

use crate::events::event_loop;
use crate::shell::shell_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub shell_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_shell: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            shell_to_app: kanal::bounded_async(capacity),
            app_to_shell: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channel_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<C>(
        &self,
        store: VocabStore<C>,
        generator: Option<Box<dyn Generator>>,
    ) -> JoinSet<anyhow::Result<()>>
    where
        C: TableConnector + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.shell_to_app.1.clone(),
            self.channels.app_to_shell.0.clone(),
            store,
            generator,
        ));

        // Session shell
        tasks.spawn(shell_loop(
            self.channels.app_to_shell.1.clone(),
            self.channels.shell_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
