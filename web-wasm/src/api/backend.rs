//! HTTP client for the prediction backend
//!
//! Implements [`DiagnosisBackend`] over the browser fetch API. A rejected
//! fetch (host unreachable) maps to `Connection`; a non-2xx status maps
//! through `AnalysisError::from_status`; a 2xx body that fails to decode
//! maps to `Malformed`.

use leptos::logging;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use neuroscan_common::{
    AnalysisError, BackendConfig, DiagnosisBackend, PredictRequest, PredictResponse, Prediction,
    SuggestionRequest, SuggestionResponse,
};

/// Backend base URL, overridable at build time:
/// `NEUROSCAN_BACKEND_URL=https://... trunk build`
pub fn backend_config() -> BackendConfig {
    match option_env!("NEUROSCAN_BACKEND_URL") {
        Some(url) if !url.is_empty() => BackendConfig::new(url),
        _ => BackendConfig::default(),
    }
}

#[derive(Clone)]
pub struct HttpBackend {
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// POST a JSON body and decode a JSON response.
    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, AnalysisError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| AnalysisError::Malformed(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| AnalysisError::Connection)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| AnalysisError::Connection)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(|_| AnalysisError::Connection)?;

        let window = web_sys::window().expect("no window");
        // fetch rejects only when the endpoint is unreachable
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|_| AnalysisError::Connection)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| AnalysisError::Connection)?;

        if !resp.ok() {
            return Err(AnalysisError::from_status(resp.status()));
        }

        let json = JsFuture::from(
            resp.json()
                .map_err(|_| AnalysisError::Malformed("unreadable body".to_string()))?,
        )
        .await
        .map_err(|_| AnalysisError::Malformed("unreadable body".to_string()))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| AnalysisError::Malformed(e.to_string()))
    }
}

impl DiagnosisBackend for HttpBackend {
    async fn predict(&self, image_base64: &str) -> Result<Prediction, AnalysisError> {
        let request = PredictRequest {
            image: image_base64.to_string(),
        };
        let result: Result<PredictResponse, _> =
            self.post_json(&self.config.predict_url(), &request).await;
        match result {
            Ok(response) => Ok(response.into()),
            Err(err) => {
                logging::error!("predict attempt failed: {err}");
                Err(err)
            }
        }
    }

    async fn suggestions(&self, diagnosis: &str) -> Result<SuggestionResponse, AnalysisError> {
        let request = SuggestionRequest {
            diagnosis: diagnosis.to_string(),
        };
        self.post_json(&self.config.suggestions_url(), &request)
            .await
            .inspect_err(|err| logging::error!("suggestions fetch failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Request serialization
    // =============================================

    #[test]
    fn test_predict_body_shape() {
        let request = PredictRequest {
            image: "/9j/4AAQ".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"image":"/9j/4AAQ"}"#);
    }

    #[test]
    fn test_suggestions_body_shape() {
        let request = SuggestionRequest {
            diagnosis: "Glioma".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"diagnosis":"Glioma"}"#);
    }

    // =============================================
    // Endpoint resolution
    // =============================================

    #[test]
    fn test_default_endpoints() {
        let backend = HttpBackend::new(BackendConfig::default());
        assert_eq!(backend.config.predict_url(), "http://localhost:5000/predict");
        assert_eq!(
            backend.config.suggestions_url(),
            "http://localhost:5000/suggestions"
        );
    }
}
