//! Event-driven state store used by the user list view.
//!
//! State lives on the UI thread inside a [`Store`]. Background work never touches
//! it directly: it sends events through a [`StateUpdater`], and the UI thread folds
//! them into the state with [`Store::sync`] once per frame.

mod error;
mod reducer;
mod runtime;
mod spawn;
mod store;
mod task;

pub use error::Error;
pub use reducer::Reducer;
pub use runtime::{StateRuntime, StateUpdater, Waker};
pub use spawn::spawn;
pub use store::Store;
pub use task::{TaskHandle, TaskId, TaskSlot};
