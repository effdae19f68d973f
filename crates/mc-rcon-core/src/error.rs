use thiserror::Error;

/// Core error types for RCON administration
#[derive(Error, Debug)]
pub enum RconError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Request id mismatch: expected {expected}, got {actual}")]
    RequestIdMismatch { expected: i32, actual: i32 },

    #[error("Invalid arguments: {details}")]
    InvalidArguments { details: String },

    #[error("Malformed server response: {response}")]
    MalformedResponse { response: String },

    #[error("External tool not found: {tool}")]
    ToolUnavailable { tool: String },

    #[error("External tool failed: {tool} - {reason}")]
    ToolFailed { tool: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Result type alias for operations that can fail with a [`RconError`].
pub type Result<T> = std::result::Result<T, RconError>;
