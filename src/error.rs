use thiserror::Error;

// Construction-time problems. A sensor with a bad config is never built,
// so these can only come out of the constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required config field `{0}` is missing or empty")]
    MissingField(&'static str),
}

// Anything the trip client reports back. The crate does not interpret
// these further; the host decides what to do with a failed poll.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("trip request failed: {0}")]
    Request(String),

    #[error("trip response is missing field `{0}`")]
    MissingField(&'static str),
}

// Refresh failures. The previous snapshot is always left in place when
// one of these is returned.
#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("invalid timestamp `{value}` in trip response")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}
