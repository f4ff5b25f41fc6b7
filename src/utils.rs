// src/utils.rs
use crate::types::{DOCX_MEDIA_TYPE, OCTET_STREAM_MEDIA_TYPE, PDF_MEDIA_TYPE};

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Media type a picker would declare for this file name
pub fn media_type_for(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("docx") => DOCX_MEDIA_TYPE,
        _ => OCTET_STREAM_MEDIA_TYPE,
    }
}

/// True when nothing but whitespace is left
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Strip trailing slashes so endpoint paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("resume.pdf"), Some("pdf".to_string()));
        assert_eq!(
            get_file_extension("document.DOCX"),
            Some("docx".to_string())
        );
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for("resume.PDF"), "application/pdf");
        assert_eq!(media_type_for("resume.docx"), DOCX_MEDIA_TYPE);
        assert_eq!(media_type_for("notes.txt"), "application/octet-stream");
        assert_eq!(media_type_for("resume"), "application/octet-stream");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t "));
        assert!(!is_blank(" Python "));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url(" https://hr.example.com/api "),
            "https://hr.example.com/api"
        );
    }
}
