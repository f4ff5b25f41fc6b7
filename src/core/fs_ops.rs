// src/core/fs_ops.rs
//! Local file access for the command-line client

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::error::AnalysisError;
use crate::types::DocumentBlob;
use crate::utils::media_type_for;

pub struct FsOps;

impl FsOps {
    /// Read a document from disk the way a file picker would hand it over:
    /// bytes, file name, and a media type declared from the extension.
    pub async fn read_document(path: &Path) -> Result<DocumentBlob, AnalysisError> {
        let bytes = fs::read(path).await.map_err(|e| {
            AnalysisError::Validation(format!("Cannot read file {}: {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        let media_type = media_type_for(&file_name);

        debug!(
            "Read document {} ({}, {} bytes)",
            path.display(),
            media_type,
            bytes.len()
        );

        Ok(DocumentBlob::new(file_name, media_type, bytes))
    }

    /// Read a text input such as a job description
    pub async fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
