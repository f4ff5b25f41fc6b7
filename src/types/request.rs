// src/types/request.rs
//! Requests handed to the analysis service

use serde::Serialize;
use std::fmt;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const OCTET_STREAM_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Screening,
    Sentiment,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Screening => write!(f, "screening"),
            Self::Sentiment => write!(f, "sentiment"),
        }
    }
}

/// A single uploaded document with the media type the uploader declared.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentBlob {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentBlob {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

// Skip the payload so logs don't carry whole resumes.
impl fmt::Debug for DocumentBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBlob")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeScreeningRequest {
    pub document: DocumentBlob,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRequest {
    pub feedback: String,
}

/// A dispatch-eligible request. Only drafts that pass validation become one.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Screening(ResumeScreeningRequest),
    Sentiment(SentimentRequest),
}

impl AnalysisRequest {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            Self::Screening(_) => AnalysisKind::Screening,
            Self::Sentiment(_) => AnalysisKind::Sentiment,
        }
    }
}
