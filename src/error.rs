use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dataset unavailable: {dataset}: {reason}")]
    DatasetUnavailable { dataset: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlannerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        PlannerError::InvalidInput(msg.into())
    }

    pub fn dataset_unavailable(dataset: impl Into<String>, reason: impl ToString) -> Self {
        PlannerError::DatasetUnavailable {
            dataset: dataset.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the failure is attributable to the request or its data
    /// (reported as a 400) rather than to the hosting process.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidInput(_)
                | PlannerError::DatasetUnavailable { .. }
                | PlannerError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
