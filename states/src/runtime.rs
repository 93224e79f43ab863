use std::fmt;
use std::sync::{Arc, OnceLock};

use flume::{Receiver, Sender, TryIter};

use crate::Error;

/// Callback fired after an event is queued, e.g. to request a repaint.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// The channel pair connecting background tasks to a [`crate::Store`].
pub struct StateRuntime<E> {
    send: Sender<E>,
    recv: Receiver<E>,
    waker: Arc<OnceLock<Waker>>,
}

impl<E> Default for StateRuntime<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for StateRuntime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRuntime")
            .field("queued", &self.recv.len())
            .field("has_waker", &self.waker.get().is_some())
            .finish()
    }
}

impl<E> StateRuntime<E> {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            waker: Arc::new(OnceLock::new()),
        }
    }

    pub fn updater(&self, state: &'static str) -> StateUpdater<E> {
        StateUpdater {
            state,
            send: self.send.clone(),
            waker: Arc::clone(&self.waker),
        }
    }

    /// Installs the waker. Only the first call has an effect.
    pub fn set_waker(&self, waker: Waker) -> bool {
        self.waker.set(waker).is_ok()
    }

    pub(crate) fn drain(&self) -> TryIter<'_, E> {
        self.recv.try_iter()
    }
}

/// Sending half handed to background tasks.
///
/// Events sent after the owning store is dropped are rejected with
/// [`Error::ChannelClosed`].
pub struct StateUpdater<E> {
    state: &'static str,
    send: Sender<E>,
    waker: Arc<OnceLock<Waker>>,
}

impl<E> Clone for StateUpdater<E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            send: self.send.clone(),
            waker: Arc::clone(&self.waker),
        }
    }
}

impl<E> fmt::Debug for StateUpdater<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateUpdater")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<E> StateUpdater<E> {
    pub fn send(&self, event: E) -> Result<(), Error> {
        self.send
            .send(event)
            .map_err(|_disconnected| Error::channel_closed(self.state))?;
        if let Some(wake) = self.waker.get() {
            wake();
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.send.is_disconnected()
    }
}
