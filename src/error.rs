use thiserror::Error;

/// Failure to hand an event to the parameter channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// Outbound queue has no free slots
    #[error("parameter channel is full")]
    Full,
    /// Transport is not running
    #[error("parameter channel is not running")]
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FadeError {
    /// Operation issued before the engine was initialized
    #[error("fade engine is not initialized")]
    NotInitialized,
    /// Request argument is out of range
    #[error("invalid fade argument")]
    InvalidArgument,
    /// A command could not be handed to the parameter channel
    #[error("parameter channel unavailable: {0}")]
    ChannelUnavailable(ChannelError),
}

impl From<ChannelError> for FadeError {
    fn from(err: ChannelError) -> Self {
        Self::ChannelUnavailable(err)
    }
}

pub type FadeResult = Result<(), FadeError>;
