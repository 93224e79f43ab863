//! The users endpoint client.

use std::collections::HashSet;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use log::debug;

use crate::http::Client;
use crate::{FetchError, UserRecord};

pub type FetchResult = Result<Vec<UserRecord>, FetchError>;
pub type BoxFetch = Pin<Box<dyn Future<Output = FetchResult> + Send + 'static>>;

/// Where the list comes from. One call to `fetch` is one outbound request.
pub trait UsersSource: Send + Sync + Debug {
    fn fetch(&self) -> BoxFetch;
}

#[derive(Debug, Clone)]
pub struct HttpUsersSource {
    url: String,
}

impl HttpUsersSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl UsersSource for HttpUsersSource {
    fn fetch(&self) -> BoxFetch {
        let url = self.url.clone();
        Box::pin(async move { fetch_users(&url).await })
    }
}

/// GETs `url` and decodes a JSON array of users.
///
/// The whole batch is rejected if the body is not an array, if any element lacks
/// a numeric `id`, or if two elements share an id.
pub async fn fetch_users(url: &str) -> FetchResult {
    debug!("GET {url}");
    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    let users: Vec<UserRecord> = response.json()?;
    ensure_unique_ids(&users)?;
    Ok(users)
}

fn ensure_unique_ids(users: &[UserRecord]) -> Result<(), FetchError> {
    let mut seen = HashSet::with_capacity(users.len());
    match users.iter().find(|user| !seen.insert(user.id)) {
        Some(duplicate) => Err(FetchError::DuplicateId(duplicate.id)),
        None => Ok(()),
    }
}
