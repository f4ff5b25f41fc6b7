// src/analysis/ingestor.rs
use tracing::{debug, warn};

use super::validator::NOT_A_PDF;
use crate::error::AnalysisError;
use crate::types::DocumentBlob;

/// Pick the document to keep from one drop or picker event.
///
/// Only the first offered file is considered; any others are discarded.
/// The caller keeps its current selection when this returns an error.
pub fn ingest(offered: Vec<DocumentBlob>) -> Result<DocumentBlob, AnalysisError> {
    let total = offered.len();
    let mut files = offered.into_iter();

    let Some(first) = files.next() else {
        warn!("Ingestion event offered no files");
        return Err(AnalysisError::Validation(NOT_A_PDF.to_string()));
    };

    if total > 1 {
        let dropped: Vec<String> = files.map(|f| f.file_name).collect();
        debug!(
            "Only one document per submission; keeping {} and discarding {:?}",
            first.file_name, dropped
        );
    }

    if !first.is_pdf() {
        warn!(
            "Rejected {} with media type {}",
            first.file_name, first.media_type
        );
        return Err(AnalysisError::Validation(NOT_A_PDF.to_string()));
    }

    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn file(name: &str, media_type: &str) -> DocumentBlob {
        DocumentBlob::new(name, media_type, name.as_bytes().to_vec())
    }

    #[test]
    fn test_first_file_wins() {
        let kept = ingest(vec![
            file("first.pdf", "application/pdf"),
            file("second.pdf", "application/pdf"),
        ])
        .unwrap();
        assert_eq!(kept.file_name, "first.pdf");
    }

    #[test]
    fn test_first_file_decides_even_if_later_ones_are_pdf() {
        let err = ingest(vec![
            file("photo.png", "image/png"),
            file("resume.pdf", "application/pdf"),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_non_pdf_rejected_with_message() {
        let err = ingest(vec![file("resume.pdf", "text/plain")]).unwrap_err();
        assert_eq!(
            err.user_message(crate::types::AnalysisKind::Screening),
            "Please upload a PDF file"
        );
    }

    #[test]
    fn test_empty_event_rejected() {
        assert!(ingest(Vec::new()).is_err());
    }
}
