use thiserror::Error;

/// Reasons a meeting URL cannot be turned into a [`ConferenceConfig`](crate::ConferenceConfig).
///
/// Malformed parameters never end up here: they are dropped or coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("meeting URL has no room name")]
    MissingRoom,
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("missing creation argument: {0}")]
    MissingArgument(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("unknown conference event: {0}")]
    UnknownEvent(String),
    #[error("invalid event payload: {0}")]
    InvalidPayload(String),
}
