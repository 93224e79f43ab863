//! Users fetching and the user list view state.

mod config;
mod error;
mod fetch_users_command;
pub mod fetcher;
pub mod http;
mod user;
mod view_state;

#[cfg(test)]
mod test_utils;

pub use config::{BusinessConfig, DEFAULT_USERS_URL, SelectionPolicy};
pub use error::{FETCH_FAILED_MESSAGE, FetchError, UNKNOWN_ERROR_MESSAGE};
pub use fetch_users_command::FetchUsersCommand;
pub use fetcher::{HttpUsersSource, UsersSource, fetch_users};
pub use user::{Address, Company, UserRecord};
pub use view_state::{LoadPhase, ViewEvent, ViewState};
