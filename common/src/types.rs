//! Shared types for the diagnosis workflow
//!
//! Wire types mirror the backend contract:
//! - POST /predict    {"image": <base64>} -> {"prediction": ..., "confidence": ...}
//! - POST /suggestions {"diagnosis": ...} -> {"suggestions": ...}

use serde::{Deserialize, Serialize};

/// Label returned by the backend when the model produced no usable class.
/// A prediction carrying this label never triggers a suggestions fetch.
pub const NO_PREDICTION_LABEL: &str = "No prediction available";

/// Shown when a 200 suggestions response omits the text field.
pub const SUGGESTIONS_MISSING: &str = "No suggestions available.";

/// Shown when the suggestions call fails outright.
pub const SUGGESTIONS_UNAVAILABLE: &str = "Unable to retrieve suggestions at this time.";

/// A completed classification: label plus fractional confidence in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

impl Prediction {
    /// Confidence as a percentage string with one decimal, e.g. "87.3%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// Body of POST /predict. The image is the raw base64 payload with the
/// `data:<mime>;base64,` prefix already stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub image: String,
}

/// Body of a 200 response from /predict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
    pub confidence: f64,
}

impl From<PredictResponse> for Prediction {
    fn from(resp: PredictResponse) -> Self {
        Self {
            label: resp.prediction,
            confidence: resp.confidence,
        }
    }
}

/// Body of POST /suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub diagnosis: String,
}

/// Body of a 200 response from /suggestions. The field is optional so a
/// well-formed but empty response falls back to [`SUGGESTIONS_MISSING`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_serialize() {
        let request = PredictRequest {
            image: "iVBORw0KGgo=".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"image":"iVBORw0KGgo="}"#);
    }

    #[test]
    fn test_predict_response_deserialize() {
        let json = r#"{"prediction": "Glioma", "confidence": 0.873}"#;
        let response: PredictResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.prediction, "Glioma");
        assert!((response.confidence - 0.873).abs() < f64::EPSILON);
    }

    #[test]
    fn test_suggestion_request_serialize() {
        let request = SuggestionRequest {
            diagnosis: "Meningioma".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"diagnosis":"Meningioma"}"#);
    }

    #[test]
    fn test_suggestion_response_missing_field() {
        let response: SuggestionResponse = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(response.suggestions, None);
    }

    #[test]
    fn test_confidence_percent_one_decimal() {
        let prediction = Prediction {
            label: "Glioma".to_string(),
            confidence: 0.873,
        };
        assert_eq!(prediction.confidence_percent(), "87.3%");
    }
}
