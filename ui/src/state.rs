use std::sync::Arc;

use log::error;
use userlist_business::{
    BusinessConfig, FetchUsersCommand, UserRecord, UsersSource, ViewEvent, ViewState,
};
use userlist_states::{Store, TaskSlot};

/// Everything the user list owns.
///
/// Dropping it cancels an in-flight fetch, so a late response never lands
/// anywhere.
pub struct State {
    store: Store<ViewState>,
    command: FetchUsersCommand,
    tasks: TaskSlot,
    mounted: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let command = FetchUsersCommand::from_config(&config);
        Self::with_command(config, command)
    }

    /// State reading users from a test server.
    pub fn test(users_url: String) -> Self {
        Self::new(BusinessConfig::new(users_url))
    }

    pub fn with_source(config: BusinessConfig, source: Arc<dyn UsersSource>) -> Self {
        Self::with_command(config, FetchUsersCommand::new(source))
    }

    fn with_command(config: BusinessConfig, command: FetchUsersCommand) -> Self {
        Self {
            store: Store::new(ViewState::with_policy(config.selection_policy)),
            command,
            tasks: TaskSlot::default(),
            mounted: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        self.store.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of fetches dispatched so far.
    pub fn fetches_started(&self) -> u64 {
        self.tasks.started()
    }

    /// Runs on first display only: hooks repaints to the egui context and starts
    /// the initial fetch.
    pub fn mount(&mut self, ctx: &egui::Context) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let ctx = ctx.clone();
        self.store.set_waker(Arc::new(move || ctx.request_repaint()));
        self.refresh();
    }

    pub fn refresh(&mut self) {
        if let Err(err) = self.command.dispatch(&mut self.tasks, self.store.updater()) {
            error!("Failed to start users fetch: {err}");
            self.fail_load(err.to_string());
        }
        self.store.sync();
    }

    /// Ends the latest load with `message`.
    ///
    /// Queued events are folded in first: a `LoadStarted` already sent by the
    /// failed dispatch must not land on top of the failure.
    fn fail_load(&mut self, message: String) {
        self.store.sync();
        let generation = self.view().generation();
        self.store.apply(ViewEvent::LoadFailed {
            generation,
            message,
        });
    }

    pub fn select(&mut self, user: UserRecord) {
        self.store.apply(ViewEvent::Selected(user));
    }

    pub fn sync(&mut self) -> usize {
        self.store.sync()
    }
}
