use std::fmt;

use log::debug;

use crate::{Reducer, StateRuntime, StateUpdater, Waker};

/// Owns one [`Reducer`] value and the channel feeding it.
pub struct Store<S: Reducer> {
    state: S,
    runtime: StateRuntime<S::Event>,
}

impl<S: Reducer> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> fmt::Debug for Store<S>
where
    S: Reducer + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("runtime", &self.runtime)
            .finish()
    }
}

impl<S: Reducer> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            runtime: StateRuntime::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn updater(&self) -> StateUpdater<S::Event> {
        self.runtime.updater(S::TYPE)
    }

    pub fn set_waker(&self, waker: Waker) -> bool {
        self.runtime.set_waker(waker)
    }

    /// Applies one event immediately, bypassing the channel.
    pub fn apply(&mut self, event: S::Event) {
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(event);
    }

    /// Folds every queued event into the state. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let events: Vec<S::Event> = self.runtime.drain().collect();
        let applied = events.len();
        for event in events {
            self.apply(event);
        }
        if applied > 0 {
            debug!("Applied {applied} queued event(s) to {}", S::TYPE);
        }
        applied
    }
}
