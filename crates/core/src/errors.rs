use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    /// The server answered but did not report success.
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("No active {0} session")]
    Session(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl CareError {
    /// True when the request reached the server and the server itself
    /// reported failure, as opposed to the request failing in transit.
    pub fn is_server_rejection(&self) -> bool {
        matches!(
            self,
            CareError::Rejected(_)
                | CareError::Http { .. }
                | CareError::NotFound(_)
                | CareError::Authentication(_)
                | CareError::Authorization(_)
        )
    }

    /// Message suitable for a failure toast.
    pub fn user_message(&self) -> String {
        match self {
            CareError::Rejected(message) | CareError::Validation(message) => message.clone(),
            CareError::Http { message, .. } if !message.is_empty() => message.clone(),
            CareError::Transport(_) => "Could not reach the server, please try again".to_string(),
            CareError::Session(role) => format!("Please sign in as {role} first"),
            other => other.to_string(),
        }
    }
}

pub type CareResult<T> = Result<T, CareError>;
