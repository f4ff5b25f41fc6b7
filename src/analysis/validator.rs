// src/analysis/validator.rs
use crate::error::AnalysisError;
use crate::types::{
    AnalysisKind, AnalysisRequest, DocumentBlob, ResumeScreeningRequest, SentimentRequest,
};
use crate::utils::is_blank;

pub const NOT_A_PDF: &str = "Please upload a PDF file";
const MISSING_DOCUMENT: &str = "Please upload a resume (PDF)";
const MISSING_JOB_DESCRIPTION: &str = "Please enter a job description";
const MISSING_FEEDBACK: &str = "Please enter employee feedback";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { reason: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    fn invalid(reason: &str) -> Self {
        Self::Invalid {
            reason: reason.to_string(),
        }
    }
}

/// User input for one analysis screen, valid or not.
pub trait Draft: Default {
    const KIND: AnalysisKind;

    fn validate(&self) -> ValidationResult;

    /// Snapshot the draft into a request. Fails with the validation reason.
    fn to_request(&self) -> Result<AnalysisRequest, AnalysisError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningDraft {
    pub document: Option<DocumentBlob>,
    pub job_description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentDraft {
    pub feedback: String,
}

pub fn validate_screening(draft: &ScreeningDraft) -> ValidationResult {
    match &draft.document {
        None => return ValidationResult::invalid(MISSING_DOCUMENT),
        Some(document) if !document.is_pdf() => return ValidationResult::invalid(NOT_A_PDF),
        Some(_) => {}
    }

    if is_blank(&draft.job_description) {
        return ValidationResult::invalid(MISSING_JOB_DESCRIPTION);
    }

    ValidationResult::Valid
}

pub fn validate_sentiment(draft: &SentimentDraft) -> ValidationResult {
    if is_blank(&draft.feedback) {
        return ValidationResult::invalid(MISSING_FEEDBACK);
    }
    ValidationResult::Valid
}

fn reject(result: ValidationResult) -> AnalysisError {
    match result {
        ValidationResult::Invalid { reason } => AnalysisError::Validation(reason),
        ValidationResult::Valid => AnalysisError::Validation("Input is incomplete".to_string()),
    }
}

impl Draft for ScreeningDraft {
    const KIND: AnalysisKind = AnalysisKind::Screening;

    fn validate(&self) -> ValidationResult {
        validate_screening(self)
    }

    fn to_request(&self) -> Result<AnalysisRequest, AnalysisError> {
        match (self.validate(), &self.document) {
            (ValidationResult::Valid, Some(document)) => {
                Ok(AnalysisRequest::Screening(ResumeScreeningRequest {
                    document: document.clone(),
                    job_description: self.job_description.clone(),
                }))
            }
            (result, _) => Err(reject(result)),
        }
    }
}

impl Draft for SentimentDraft {
    const KIND: AnalysisKind = AnalysisKind::Sentiment;

    fn validate(&self) -> ValidationResult {
        validate_sentiment(self)
    }

    fn to_request(&self) -> Result<AnalysisRequest, AnalysisError> {
        match self.validate() {
            ValidationResult::Valid => Ok(AnalysisRequest::Sentiment(SentimentRequest {
                feedback: self.feedback.clone(),
            })),
            result => Err(reject(result)),
        }
    }
}
