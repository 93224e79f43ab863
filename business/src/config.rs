/// Endpoint the reference deployment reads users from.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// What a successful refetch does to a selection whose id is no longer listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Keep showing the last selected record in the detail panel.
    #[default]
    Retain,
    /// Drop the selection when its id is missing from the new list.
    ClearWhenMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub users_url: String,
    pub selection_policy: SelectionPolicy,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
            selection_policy: SelectionPolicy::default(),
        }
    }

    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}
