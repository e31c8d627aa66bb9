//! Plain-text report synthesis
//!
//! Purely derived from the session state; the caller triggers the actual
//! download. Regenerating with the same inputs yields the same bytes.

use crate::types::Prediction;

/// Inserted when no suggestion text was available at export time.
const NO_SUGGESTIONS_LINE: &str = "No suggestions were available for this diagnosis.";

const ADVISORY: &str = "This is an AI-assisted analysis. Please consult with a healthcare \
professional for accurate medical advice.";

/// Build the exported report body: label, confidence as a one-decimal
/// percentage, and the suggestion text (or a fallback line).
pub fn build_report(prediction: &Prediction, suggestions: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("NeuroScan AI - Diagnosis Report\n");
    out.push_str("===============================\n\n");
    out.push_str(&format!("Diagnosis: {}\n", prediction.label));
    out.push_str(&format!("Confidence: {}\n\n", prediction.confidence_percent()));
    out.push_str("Suggestions:\n");
    match suggestions {
        Some(text) if !text.trim().is_empty() => out.push_str(text),
        _ => out.push_str(NO_SUGGESTIONS_LINE),
    }
    out.push_str("\n\n");
    out.push_str(ADVISORY);
    out.push('\n');
    out
}

/// File name for the downloaded report, slugged from the label:
/// "Pituitary Tumor" -> "diagnosis-report-pituitary-tumor.txt".
pub fn report_filename(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "diagnosis-report.txt".to_string()
    } else {
        format!("diagnosis-report-{}.txt", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction() -> Prediction {
        Prediction {
            label: "Glioma".to_string(),
            confidence: 0.873,
        }
    }

    #[test]
    fn test_report_contains_percentage_one_decimal() {
        let report = build_report(&prediction(), Some("See a specialist."));
        assert!(report.contains("87.3%"));
    }

    #[test]
    fn test_report_contains_label_and_suggestions() {
        let report = build_report(&prediction(), Some("1. Surgery\n2. Radiation"));
        assert!(report.contains("Diagnosis: Glioma"));
        assert!(report.contains("1. Surgery\n2. Radiation"));
        assert!(report.contains("healthcare professional"));
    }

    #[test]
    fn test_report_fallback_line_without_suggestions() {
        let report = build_report(&prediction(), None);
        assert!(report.contains(NO_SUGGESTIONS_LINE));

        let report = build_report(&prediction(), Some("   "));
        assert!(report.contains(NO_SUGGESTIONS_LINE));
    }

    #[test]
    fn test_report_is_idempotent() {
        let a = build_report(&prediction(), Some("text"));
        let b = build_report(&prediction(), Some("text"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_filename_slug() {
        assert_eq!(
            report_filename("Pituitary Tumor"),
            "diagnosis-report-pituitary-tumor.txt"
        );
        assert_eq!(report_filename("Glioma"), "diagnosis-report-glioma.txt");
    }

    #[test]
    fn test_filename_degenerate_label() {
        assert_eq!(report_filename("???"), "diagnosis-report.txt");
        assert_eq!(report_filename(""), "diagnosis-report.txt");
    }
}
