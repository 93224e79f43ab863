//! The user list's presentation state and its transitions.
//!
//! Loading is a small machine, `Idle -> Loading -> {Loaded, Failed}`, and a new
//! load may start from any phase. The selected record is orthogonal to it: no
//! load transition touches it except a successful load under
//! [`SelectionPolicy::ClearWhenMissing`].
//!
//! Every load carries the generation of the task that runs it. A completion
//! from an older generation than the latest `LoadStarted` is dropped, so a
//! superseded fetch can never end a newer one.

use log::debug;
use userlist_states::Reducer;

use crate::{SelectionPolicy, UserRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum ViewEvent {
    LoadStarted(u64),
    LoadSucceeded { generation: u64, users: Vec<UserRecord> },
    LoadFailed { generation: u64, message: String },
    Selected(UserRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    phase: LoadPhase,
    users: Vec<UserRecord>,
    selected: Option<UserRecord>,
    policy: SelectionPolicy,
    generation: u64,
}

impl ViewState {
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Users in server order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn selected(&self) -> Option<&UserRecord> {
        self.selected.as_ref()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Generation of the most recent load started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rows are matched to the selection by id, not by value.
    pub fn is_selected(&self, user: &UserRecord) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == user.id)
    }

    pub fn begin_load(self, generation: u64) -> Self {
        Self {
            phase: LoadPhase::Loading,
            generation: generation.max(self.generation),
            ..self
        }
    }

    /// Success replaces `users` wholesale; failure leaves them untouched.
    pub fn complete_load(self, generation: u64, result: Result<Vec<UserRecord>, String>) -> Self {
        if generation < self.generation {
            debug!(
                "Dropping result of load {generation}, superseded by {}",
                self.generation
            );
            return self;
        }
        match result {
            Ok(users) => {
                let selected = match (self.policy, self.selected) {
                    (SelectionPolicy::ClearWhenMissing, Some(selected))
                        if !users.iter().any(|u| u.id == selected.id) =>
                    {
                        debug!("Clearing selection of user {}, no longer listed", selected.id);
                        None
                    }
                    (_, selected) => selected,
                };
                Self {
                    phase: LoadPhase::Loaded,
                    users,
                    selected,
                    ..self
                }
            }
            Err(message) => Self {
                phase: LoadPhase::Failed(message),
                ..self
            },
        }
    }

    /// The record need not be one of the current `users`.
    pub fn select(self, user: UserRecord) -> Self {
        Self {
            selected: Some(user),
            ..self
        }
    }
}

impl Reducer for ViewState {
    const TYPE: &'static str = "user_list_view";

    type Event = ViewEvent;

    fn reduce(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::LoadStarted(generation) => self.begin_load(generation),
            ViewEvent::LoadSucceeded { generation, users } => {
                self.complete_load(generation, Ok(users))
            }
            ViewEvent::LoadFailed {
                generation,
                message,
            } => self.complete_load(generation, Err(message)),
            ViewEvent::Selected(user) => self.select(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::user;

    fn loaded(users: Vec<UserRecord>) -> ViewEvent {
        ViewEvent::LoadSucceeded {
            generation: 0,
            users,
        }
    }

    fn failed(message: &str) -> ViewEvent {
        ViewEvent::LoadFailed {
            generation: 0,
            message: message.to_owned(),
        }
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = ViewState::default();
        assert_eq!(state.phase(), &LoadPhase::Idle);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.users().is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn begin_load_clears_previous_error() {
        let state = ViewState::default()
            .reduce(failed("boom"))
            .reduce(ViewEvent::LoadStarted(0));
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_keeps_server_order() {
        let state = ViewState::default()
            .reduce(ViewEvent::LoadStarted(0))
            .reduce(loaded(vec![user(3), user(1), user(2)]));

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        let ids: Vec<u64> = state.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn failure_keeps_previous_users() {
        let state = ViewState::default()
            .reduce(loaded(vec![user(1), user(2)]))
            .reduce(ViewEvent::LoadStarted(0))
            .reduce(failed("Failed to fetch users"));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Failed to fetch users"));
        assert_eq!(state.users().len(), 2);
    }

    #[test]
    fn select_marks_only_matching_id() {
        let state = ViewState::default()
            .reduce(loaded(vec![user(1), user(2), user(3)]))
            .reduce(ViewEvent::Selected(user(2)));

        assert_eq!(state.selected(), Some(&user(2)));
        let marked: Vec<u64> = state
            .users()
            .iter()
            .filter(|u| state.is_selected(u))
            .map(|u| u.id)
            .collect();
        assert_eq!(marked, vec![2]);
    }

    #[test]
    fn selection_matches_by_id_not_value() {
        let mut renamed = user(1);
        renamed.name = "Someone Else".to_owned();
        let state = ViewState::default().reduce(ViewEvent::Selected(renamed));
        assert!(state.is_selected(&user(1)));
    }

    #[test]
    fn select_is_independent_of_load_phase() {
        let state = ViewState::default()
            .reduce(ViewEvent::LoadStarted(0))
            .reduce(ViewEvent::Selected(user(9)));
        assert!(state.is_loading());
        assert_eq!(state.selected().map(|u| u.id), Some(9));
    }

    #[test]
    fn retain_policy_keeps_stale_selection() {
        let state = ViewState::default()
            .reduce(loaded(vec![user(1), user(2)]))
            .reduce(ViewEvent::Selected(user(1)))
            .reduce(ViewEvent::LoadStarted(0))
            .reduce(loaded(vec![user(5), user(6)]));

        assert_eq!(state.selected(), Some(&user(1)));
        assert!(!state.users().iter().any(|u| state.is_selected(u)));
    }

    #[test]
    fn clear_policy_drops_missing_selection() {
        let state = ViewState::with_policy(SelectionPolicy::ClearWhenMissing)
            .reduce(loaded(vec![user(1), user(2)]))
            .reduce(ViewEvent::Selected(user(1)))
            .reduce(loaded(vec![user(5), user(6)]));

        assert!(state.selected().is_none());
        assert_eq!(state.policy(), SelectionPolicy::ClearWhenMissing);
    }

    #[test]
    fn clear_policy_keeps_listed_selection() {
        let state = ViewState::with_policy(SelectionPolicy::ClearWhenMissing)
            .reduce(ViewEvent::Selected(user(2)))
            .reduce(loaded(vec![user(1), user(2)]));

        assert_eq!(state.selected().map(|u| u.id), Some(2));
    }

    #[test]
    fn clear_policy_ignores_failed_refetch() {
        let state = ViewState::with_policy(SelectionPolicy::ClearWhenMissing)
            .reduce(ViewEvent::Selected(user(2)))
            .reduce(failed("offline"));

        assert_eq!(state.selected().map(|u| u.id), Some(2));
    }

    #[test]
    fn superseded_success_is_dropped() {
        let state = ViewState::default()
            .reduce(ViewEvent::LoadStarted(1))
            .reduce(ViewEvent::LoadStarted(2))
            .reduce(ViewEvent::LoadSucceeded {
                generation: 1,
                users: vec![user(1)],
            });

        assert!(state.is_loading());
        assert!(state.users().is_empty());
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn superseded_failure_is_dropped() {
        let state = ViewState::default()
            .reduce(ViewEvent::LoadStarted(1))
            .reduce(ViewEvent::LoadStarted(2))
            .reduce(ViewEvent::LoadSucceeded {
                generation: 2,
                users: vec![user(7)],
            })
            .reduce(ViewEvent::LoadFailed {
                generation: 1,
                message: "offline".to_owned(),
            });

        assert_eq!(state.phase(), &LoadPhase::Loaded);
        assert_eq!(state.users(), &[user(7)]);
    }

    #[test]
    fn late_start_does_not_rewind_generation() {
        let state = ViewState::default()
            .reduce(ViewEvent::LoadStarted(3))
            .reduce(ViewEvent::LoadStarted(2));
        assert_eq!(state.generation(), 3);
    }
}
