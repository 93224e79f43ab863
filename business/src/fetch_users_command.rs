//! Fetch users command.
//!
//! Fetching is a side effect, so it lives in an explicitly dispatched command
//! rather than in anything that runs implicitly per frame.
//!
//! 1) Build once: `FetchUsersCommand::from_config(&config)`
//! 2) Dispatch at mount, or when the user hits refresh:
//!    `command.dispatch(&mut tasks, store.updater())`
//! 3) Each frame: `store.sync()` folds the queued events into `ViewState`.
//!
//! Every dispatch goes through a `TaskSlot`, which cancels the previous fetch. A
//! fetch whose token was cancelled publishes nothing. Its events also carry the
//! task generation, so a result that slips past the cancellation check is still
//! dropped by `ViewState` once a newer load has started.

use std::any::TypeId;
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio_util::sync::CancellationToken;
use userlist_states::{StateUpdater, TaskHandle, TaskSlot, spawn};

use crate::fetcher::{BoxFetch, HttpUsersSource, UsersSource};
use crate::{BusinessConfig, ViewEvent};

#[derive(Debug, Clone)]
pub struct FetchUsersCommand {
    source: Arc<dyn UsersSource>,
}

impl FetchUsersCommand {
    pub fn new(source: Arc<dyn UsersSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(Arc::new(HttpUsersSource::new(config.users_url())))
    }

    /// Emits `LoadStarted` and spawns the request.
    ///
    /// Fails only if the state store is gone or the task could not be spawned.
    pub fn dispatch(
        &self,
        tasks: &mut TaskSlot,
        updater: StateUpdater<ViewEvent>,
    ) -> Result<TaskHandle, userlist_states::Error> {
        let handle = tasks.start(TypeId::of::<Self>());
        let generation = handle.id().generation();
        info!("FetchUsersCommand: fetching users (generation {generation})");

        updater.send(ViewEvent::LoadStarted(generation))?;
        spawn(run(
            self.source.fetch(),
            handle.cancellation_token(),
            updater,
            generation,
        ))?;
        Ok(handle)
    }
}

async fn run(
    fetch: BoxFetch,
    cancel: CancellationToken,
    updater: StateUpdater<ViewEvent>,
    generation: u64,
) {
    let result = tokio::select! {
        () = cancel.cancelled() => {
            warn!("FetchUsersCommand: generation {generation} cancelled before completion");
            return;
        }
        result = fetch => result,
    };

    let event = match result {
        Ok(users) => {
            info!("FetchUsersCommand: fetched {} users", users.len());
            ViewEvent::LoadSucceeded { generation, users }
        }
        Err(err) => {
            error!("FetchUsersCommand: {err}");
            ViewEvent::LoadFailed {
                generation,
                message: err.user_message(),
            }
        }
    };

    if cancel.is_cancelled() {
        warn!("FetchUsersCommand: generation {generation} cancelled, dropping result");
        return;
    }
    if let Err(err) = updater.send(event) {
        debug!("FetchUsersCommand: {err}");
    }
}
