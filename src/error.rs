use std::time::Duration;
use thiserror::Error;

/// Main error type for the leaderboard
///
/// The per-identifier variants (`HttpStatus`, `Transport`, `Timeout`,
/// `Malformed`, `Cancelled`) never escape `fetch_all`: their `Display`
/// output becomes the message of a failure record.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Non-2xx response from the profile service
    #[error("{}", status_message(.identifier, *.status))]
    HttpStatus { identifier: String, status: u16 },

    /// Connection-level failure before a status was received
    #[error("Network error while fetching \"{identifier}\": {message}")]
    Transport { identifier: String, message: String },

    /// Request exceeded the configured timeout
    #[error("Request for \"{identifier}\" timed out after {after:?}.")]
    Timeout { identifier: String, after: Duration },

    /// 2xx response whose body does not match the profile schema
    #[error("Malformed profile for \"{identifier}\": {message}")]
    Malformed { identifier: String, message: String },

    /// The fetch was cancelled before this identifier settled
    #[error("Fetch for \"{identifier}\" was cancelled.")]
    Cancelled { identifier: String },

    /// A newer fetch started, or the fetch was cancelled, before this one finished
    #[error("Fetch was cancelled or superseded by a newer one.")]
    Superseded,

    /// No identifiers left after parsing user input
    #[error("Please enter at least one username.")]
    EmptyInput,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Human-readable message for a failed HTTP status.
pub fn status_message(identifier: &str, status: u16) -> String {
    match status {
        400 => format!("Bad Request (400) for \"{identifier}\"."),
        401 => format!("Unauthorized (401) while fetching \"{identifier}\"."),
        403 => format!("Forbidden (403) - Access denied for \"{identifier}\"."),
        404 => format!("User not found: \"{identifier}\" (404)."),
        405 => format!("Method Not Allowed (405) for \"{identifier}\"."),
        406 => format!("Not Acceptable (406) for \"{identifier}\"."),
        422 => format!("Unprocessable Entity (422) for \"{identifier}\"."),
        429 => format!("Too Many Requests (429) while fetching \"{identifier}\"."),
        500 => format!("Internal Server Error (500) while fetching \"{identifier}\"."),
        503 => format!("Service Unavailable (503) while fetching \"{identifier}\"."),
        other => format!("Unexpected error ({other}) for \"{identifier}\"."),
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LeaderboardError>;
