//! NeuroScan Common Library
//!
//! Platform-independent core shared with the web (WASM) frontend:
//! wire types, error taxonomy, payload helpers, retry policy and the
//! diagnosis session driver.

pub mod config;
pub mod error;
pub mod payload;
pub mod report;
pub mod retry;
pub mod session;
pub mod types;

pub use config::BackendConfig;
pub use error::{AnalysisError, Result};
pub use payload::{extract_base64_from_data_url, is_image_mime, strip_data_url};
pub use report::{build_report, report_filename};
pub use retry::RetryPolicy;
pub use session::{
    fetch_suggestions, run_prediction, wants_suggestions, DiagnosisBackend, DiagnosisSession,
    SessionToken,
};
pub use types::{
    PredictRequest, PredictResponse, Prediction, SuggestionRequest, SuggestionResponse,
    NO_PREDICTION_LABEL, SUGGESTIONS_MISSING, SUGGESTIONS_UNAVAILABLE,
};
