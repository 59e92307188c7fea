use thiserror::Error;

/// Convenient result alias for the gridbox library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for transport-level HTTP client errors (connect, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Upstream answered at the transport level but not with a success status.
    #[error("Ergast returned status {status}")]
    UpstreamStatus { status: reqwest::StatusCode },

    /// Upstream body could not be decoded into the expected MRData envelope.
    #[error("Ergast response did not match the expected schema: {message}")]
    Schema { message: String },

    /// A results query matched no race (empty race table for that round).
    #[error("no race found for season {year} round {round}")]
    RaceNotFound { year: String, round: String },

    /// Raised when the race on a results query carries no date field.
    #[error("race for season {year} round {round} has no date")]
    MissingDate { year: String, round: String },
}

impl Error {
    /// True for failures of the outbound call itself, as opposed to failures
    /// interpreting a successful response.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Http(_) | Error::UpstreamStatus { .. })
    }
}
