/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    Api {
        status: u16,
        /// The `message` field of the JSON error body, when the server sent one
        message: Option<String>,
    },
}

impl AppError {
    /// The server-supplied error message, if the failure carried one.
    ///
    /// Transport failures and error bodies without a `message` field return
    /// `None`; callers substitute their own fallback text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api {
                message: Some(msg), ..
            } => Some(msg.as_str()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
