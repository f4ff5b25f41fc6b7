// src/types/mod.rs
pub mod request;
pub mod result;

pub use request::{
    AnalysisKind, AnalysisRequest, DocumentBlob, ResumeScreeningRequest, SentimentRequest,
    DOCX_MEDIA_TYPE, OCTET_STREAM_MEDIA_TYPE, PDF_MEDIA_TYPE,
};
pub use result::{
    AnalysisResult, Score, ScoreScale, ScreeningResult, SentimentLabel, SentimentResult,
};
