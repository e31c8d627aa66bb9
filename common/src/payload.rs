//! Data URL helpers
//!
//! The browser's FileReader hands the preview back as a
//! `data:<mime>;base64,<payload>` string; the backend wants the bare
//! payload. MIME inspection also backs the drag-and-drop filter.

use crate::error::AnalysisError;

/// Extract the base64 payload from a data URL.
///
/// Returns `None` when the string has no comma-separated payload part.
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Whether a MIME type denotes image content. Drag-and-drop accepts only
/// these; anything else is silently ignored.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Strip the data-URI prefix and validate the remaining payload.
///
/// An absent or empty payload is a terminal local error.
pub fn strip_data_url(data_url: &str) -> Result<&str, AnalysisError> {
    match extract_base64_from_data_url(data_url) {
        Some(payload) if !payload.is_empty() => Ok(payload),
        _ => Err(AnalysisError::EmptyPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64_from_data_url(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_from_data_url_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_base64_from_data_url(data_url), Some("iVBORw0KGgo="));
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
    }

    #[test]
    fn test_extract_base64_from_data_url_empty() {
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/plain"));
    }

    #[test]
    fn test_strip_data_url_ok() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(strip_data_url(data_url), Ok("/9j/4AAQ"));
    }

    #[test]
    fn test_strip_data_url_missing_payload() {
        assert_eq!(strip_data_url("no comma here"), Err(AnalysisError::EmptyPayload));
    }

    #[test]
    fn test_strip_data_url_empty_payload() {
        assert_eq!(
            strip_data_url("data:image/jpeg;base64,"),
            Err(AnalysisError::EmptyPayload)
        );
    }
}
