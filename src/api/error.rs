use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP status outside the 2xx range
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Server answered but its own status field was not "ok"
    #[error("server returned status '{status}': {message}")]
    Server { status: String, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid IP address '{0}'")]
    InvalidIp(String),

    #[error("no active session, call start_session first")]
    NoSession,

    #[error("credentials were already used by a previous login")]
    CredentialsConsumed,
}
