use thiserror::Error;

/// Why a fetch attempt ended without a
/// task list. Every variant is terminal
/// for that attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response whose body carried no `error` field.
    #[error("request failed with status {0}")]
    Status(u16),

    /// Non-2xx response with a server-reported message, shown verbatim.
    #[error("{0}")]
    Server(String),

    /// The body was not the JSON shape the endpoint promises.
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("loading messages cannot be empty")]
    NoLoadingMessages,

    #[error("a fetch is already in flight")]
    FetchInFlight,
}
