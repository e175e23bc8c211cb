use thiserror::Error;

/// Application-wide error types.
///
/// This enum represents all possible errors that can occur while fetching,
/// parsing and serving the vehicle dataset. It uses the `thiserror` crate for
/// ergonomic error handling and automatic conversion from underlying library
/// errors.
///
/// # Error Conversion
///
/// Some errors automatically convert from their source types using `#[from]`:
/// - `std::io::Error` → `AppError::Io`
/// - `serde_json::Error` → `AppError::SerializationError`
///
/// # Examples
///
/// ```no_run
/// use voltdash_core::error::AppError;
///
/// fn example() -> Result<(), AppError> {
///     Err(AppError::Generic("Something went wrong".to_string()))
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client request failed.
    ///
    /// This error occurs when HTTP requests fail due to non-transient issues
    /// such as a 4xx status or an unreadable response body.
    #[error("API Client error: {0}")]
    ClientError(String),

    /// Network or connection error.
    ///
    /// This error occurs when a network request fails due to connectivity issues,
    /// DNS resolution failures, or the remote server being unreachable.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timeout.
    ///
    /// This error occurs when a request takes longer than the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Please wait and try again.")]
    RateLimitExceeded,

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading a local dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV document could not be parsed.
    ///
    /// `line` is the 1-based line of the offending record when known.
    #[error("CSV error{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError { line: Option<u64>, message: String },

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// No vehicle with the requested id.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(u64),

    /// Source returned a successful status with an empty body.
    #[error("Empty response from dataset source")]
    EmptyResponse,

    /// Generic application error for cases not covered by specific variants.
    #[error("Error: {0}")]
    Generic(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {} fields, found {}", expected_len, len),
            _ => err.to_string(),
        };
        AppError::CsvError { line, message }
    }
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ClientError(msg) => {
                if msg.contains("timeout") || msg.contains("timed out") {
                    "Request timed out. The dataset host may be slow or unreachable.".to_string()
                } else {
                    format!("Download failed: {}", msg)
                }
            }
            AppError::NetworkError(msg) => {
                format!("Network error: {}\n   Check your internet connection.", msg)
            }
            AppError::Timeout(secs) => {
                format!(
                    "Request timed out after {} seconds.\n   Try again later or use --dataset-path with a local copy.",
                    secs
                )
            }
            AppError::RateLimitExceeded => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            AppError::InvalidUrl(url) => {
                format!(
                    "Invalid dataset URL: {}\n   Example: https://example.org/Electric_Vehicle_Population_Data.csv",
                    url
                )
            }
            AppError::CsvError { .. } => {
                format!("{}\n   Is the source a valid CSV document?", self)
            }
            AppError::EmptyResponse => {
                "The dataset source returned no data.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// # Examples
    ///
    /// ```
    /// use voltdash_core::error::AppError;
    ///
    /// let err = AppError::NetworkError("connection reset".to_string());
    /// assert!(err.is_retryable());
    ///
    /// let err = AppError::VehicleNotFound(42);
    /// assert!(!err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkError(_) | AppError::Timeout(_) | AppError::RateLimitExceeded
        )
    }
}
