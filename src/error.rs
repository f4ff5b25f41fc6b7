// src/error.rs
use serde::Serialize;
use thiserror::Error;

use crate::types::AnalysisKind;

const SHAPE_MISMATCH_MESSAGE: &str = "Invalid response format from server";

/// Every failure the submission pipeline can surface.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error (status {status:?}): {cause}")]
    Transport {
        status: Option<u16>,
        detail: Option<String>,
        cause: String,
    },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Validation,
    Transport,
    ShapeMismatch,
    Configuration,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Transport => "TRANSPORT_ERROR",
            Self::ShapeMismatch => "SHAPE_MISMATCH",
            Self::Configuration => "CONFIGURATION_ERROR",
        }
    }
}

impl AnalysisError {
    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            detail: None,
            cause: cause.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Text shown in the alert region. Only validation reasons and
    /// server-supplied details are passed through verbatim.
    pub fn user_message(&self, analysis: AnalysisKind) -> String {
        match self {
            Self::Validation(reason) => reason.clone(),
            Self::Transport {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Transport { .. } => match analysis {
                AnalysisKind::Screening => {
                    "Failed to process resume. Please try again.".to_string()
                }
                AnalysisKind::Sentiment => {
                    "Failed to analyze feedback. Please try again.".to_string()
                }
            },
            Self::ShapeMismatch(_) => SHAPE_MISMATCH_MESSAGE.to_string(),
            Self::Configuration(reason) => reason.clone(),
        }
    }
}

/// The error half of a submission's state, as the user sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorDescriptor {
    pub fn from_error(error: &AnalysisError, analysis: AnalysisKind) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message(analysis),
        }
    }
}
