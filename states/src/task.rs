//! Task bookkeeping for cooperative cancellation.
//!
//! - `TaskId`: which command spawned a task, plus a generation counter
//! - `TaskHandle`: a `TaskId` paired with the `CancellationToken` the task watches
//! - `TaskSlot`: holds at most one live handle; starting a new task cancels the old
//!   one, and dropping the slot cancels whatever is still running
//!
//! ```ignore
//! let mut slot = TaskSlot::default();
//! let handle = slot.start(TypeId::of::<FetchUsersCommand>());
//! spawn(async move {
//!     tokio::select! {
//!         _ = handle.cancellation_token().cancelled() => {}
//!         _ = do_async_work() => {}
//!     }
//! });
//! ```

use std::any::TypeId;

use log::debug;
use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// Two ids with the same `type_id` and different generations were started by the
/// same command; the higher generation is the more recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task.
///
/// Cancelling only signals the token. The task itself has to race its work
/// against `cancelled()` and skip publishing results once signalled.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Holds the single live task of its owner.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Option<TaskHandle>,
    generation: u64,
}

impl TaskSlot {
    /// Cancels the running task, if any, and hands out a handle for the next one.
    pub fn start(&mut self, type_id: TypeId) -> TaskHandle {
        self.cancel();
        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(type_id, self.generation),
            CancellationToken::new(),
        );
        self.current = Some(handle.clone());
        handle
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take()
            && !previous.is_cancelled()
        {
            debug!(
                "Cancelling task generation {}",
                previous.id().generation()
            );
            previous.cancel();
        }
    }

    pub fn current(&self) -> Option<&TaskHandle> {
        self.current.as_ref()
    }

    /// Number of tasks started through this slot.
    pub fn started(&self) -> u64 {
        self.generation
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
