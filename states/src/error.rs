use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State channel closed, dropped event for: {state}")]
    ChannelClosed { state: &'static str },
    #[error("Failed to spawn task: {0}")]
    Spawn(#[from] std::io::Error),
}

impl Error {
    pub fn channel_closed(state: &'static str) -> Self {
        Self::ChannelClosed { state }
    }
}
