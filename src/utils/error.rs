use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown product SKU: {sku}")]
    UnknownProduct { sku: String },

    #[error("Product not found: {id}")]
    ProductNotFound { id: u32 },

    #[error("Invalid feedback field '{field}' ({value}): {reason}")]
    InvalidFeedback {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Feedback store error: {message}")]
    StoreError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FeedbackError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedbackError::ConfigError { .. }
            | FeedbackError::ConfigValidationError { .. }
            | FeedbackError::InvalidConfigValueError { .. }
            | FeedbackError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FeedbackError::UnknownProduct { .. }
            | FeedbackError::ProductNotFound { .. }
            | FeedbackError::InvalidFeedback { .. } => ErrorCategory::Validation,
            FeedbackError::IoError(_) | FeedbackError::StoreError { .. } => {
                ErrorCategory::Storage
            }
            FeedbackError::CsvError(_) | FeedbackError::SerializationError(_) => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedbackError::UnknownProduct { .. } | FeedbackError::ProductNotFound { .. } => {
                "Run the `products` command to list the known SKUs"
            }
            FeedbackError::InvalidFeedback { .. } => {
                "Check the rating range in [ingest] and resubmit the feedback"
            }
            FeedbackError::CsvError(_) => {
                "Input CSV needs a header row with product_sku,rating,text"
            }
            FeedbackError::SerializationError(_) => {
                "Input JSON must be an array of {product_sku, rating, text} objects"
            }
            FeedbackError::IoError(_) | FeedbackError::StoreError { .. } => {
                "Check that the store path exists and is writable"
            }
            _ => "Review the configuration file and fix the reported field",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Validation => format!("Feedback rejected: {}", self),
            ErrorCategory::Storage => format!("Could not access feedback storage: {}", self),
            ErrorCategory::Data => format!("Could not read input data: {}", self),
        }
    }

    pub(crate) fn invalid_feedback(
        field: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        FeedbackError::InvalidFeedback {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_medium_severity() {
        let err = FeedbackError::UnknownProduct {
            sku: "NOPE".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("NOPE"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = FeedbackError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
