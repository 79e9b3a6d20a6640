use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search endpoint {url} responded with status {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Search response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Element not found: #{id}")]
    ElementNotFound { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Page,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::Http(_) | SearchError::UnexpectedStatus { .. } => ErrorCategory::Network,
            SearchError::Decode(_) => ErrorCategory::Data,
            SearchError::ElementNotFound { .. } => ErrorCategory::Page,
            SearchError::Io(_) => ErrorCategory::Storage,
            SearchError::Url(_)
            | SearchError::ConfigValidation { .. }
            | SearchError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SearchError::Http(_) | SearchError::UnexpectedStatus { .. } => ErrorSeverity::Medium,
            SearchError::Decode(_) | SearchError::ElementNotFound { .. } => ErrorSeverity::High,
            SearchError::Io(_) => ErrorSeverity::Critical,
            SearchError::Url(_)
            | SearchError::ConfigValidation { .. }
            | SearchError::InvalidConfigValue { .. } => ErrorSeverity::High,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchError::Http(_) => "Check that the search service is running and reachable",
            SearchError::UnexpectedStatus { status, .. } if *status >= 500 => {
                "The search service failed; try again later"
            }
            SearchError::UnexpectedStatus { .. } => {
                "Check the search endpoint path and query parameter name"
            }
            SearchError::Decode(_) => {
                "The endpoint must return a JSON array of doctor records"
            }
            SearchError::ElementNotFound { .. } => {
                "Make sure the page declares the input and results elements"
            }
            SearchError::Io(_) => "Check that the output path is writable",
            SearchError::Url(_)
            | SearchError::ConfigValidation { .. }
            | SearchError::InvalidConfigValue { .. } => "Fix the configuration and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::Http(_) => "Could not reach the doctor search service".to_string(),
            SearchError::UnexpectedStatus { status, .. } => {
                format!("Doctor search failed (HTTP {})", status)
            }
            SearchError::Decode(_) => "Doctor search returned an unreadable response".to_string(),
            SearchError::ElementNotFound { id } => format!("Page element #{} is missing", id),
            SearchError::Io(e) => format!("Could not write search results: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
