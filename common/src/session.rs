//! Diagnosis session driver
//!
//! One session covers one selected image: predict with bounded retry, then
//! a single suggestions fetch for non-sentinel labels. The backend is a
//! trait so the WASM fetch client and native test doubles plug in equally,
//! and the ingest/analyze/export state transitions live in
//! [`DiagnosisSession`] so they are testable without a browser.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::AnalysisError;
use crate::payload::{is_image_mime, strip_data_url};
use crate::report::{build_report, report_filename};
use crate::retry::RetryPolicy;
use crate::types::{
    Prediction, SuggestionResponse, NO_PREDICTION_LABEL, SUGGESTIONS_MISSING,
    SUGGESTIONS_UNAVAILABLE,
};

/// Coarse workflow-phase values for the progress indicator.
pub const PROGRESS_IDLE: u8 = 0;
pub const PROGRESS_REQUEST_SENT: u8 = 25;
pub const PROGRESS_RESPONSE_RECEIVED: u8 = 75;
pub const PROGRESS_COMPLETE: u8 = 100;

/// The two endpoint calls the workflow depends on.
pub trait DiagnosisBackend {
    /// POST the raw base64 payload to /predict.
    fn predict(
        &self,
        image_base64: &str,
    ) -> impl Future<Output = Result<Prediction, AnalysisError>>;

    /// POST a diagnosis label to /suggestions.
    fn suggestions(
        &self,
        diagnosis: &str,
    ) -> impl Future<Output = Result<SuggestionResponse, AnalysisError>>;
}

/// Generation counter invalidating stale in-flight responses.
///
/// Ingesting a new image or starting a new analysis renews the token; a
/// resumed task compares its generation before writing any state, so a
/// late response for a superseded session is discarded.
#[derive(Clone, Debug, Default)]
pub struct SessionToken(Arc<AtomicU64>);

impl SessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all earlier ones.
    pub fn renew(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// Whether a successful prediction should chain into a suggestions fetch.
/// The sentinel label never does.
pub fn wants_suggestions(label: &str) -> bool {
    !label.eq_ignore_ascii_case(NO_PREDICTION_LABEL)
}

/// Transient state for one analysis session.
///
/// Owns everything the diagnosis screen renders and gates every
/// transition: the busy flag, the one-active-image invariant, the
/// non-image drop filter and the stale-response discard. The UI holds one
/// of these in a signal and forwards events; async tasks report back with
/// the generation they were started under.
#[derive(Clone, Debug, Default)]
pub struct DiagnosisSession {
    file_name: Option<String>,
    preview: Option<String>,
    analyzing: bool,
    progress: u8,
    result: Option<Result<Prediction, AnalysisError>>,
    suggestions: Option<String>,
    suggestions_loading: bool,
    token: SessionToken,
}

impl DiagnosisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&Result<Prediction, AnalysisError>> {
        self.result.as_ref()
    }

    pub fn suggestions(&self) -> Option<&str> {
        self.suggestions.as_deref()
    }

    pub fn suggestions_loading(&self) -> bool {
        self.suggestions_loading
    }

    /// Ingest a file from the picker (unchecked beyond existing). Discards
    /// the previous preview and all downstream state, invalidates in-flight
    /// work and returns the new generation for the preview read.
    pub fn ingest(&mut self, file_name: &str) -> u64 {
        let generation = self.token.renew();
        self.file_name = Some(file_name.to_string());
        self.preview = None;
        self.analyzing = false;
        self.progress = PROGRESS_IDLE;
        self.result = None;
        self.suggestions = None;
        self.suggestions_loading = false;
        generation
    }

    /// Ingest a dropped file. Only image MIME types are accepted; anything
    /// else returns `None` and leaves the session untouched.
    pub fn ingest_drop(&mut self, file_name: &str, mime: &str) -> Option<u64> {
        if !is_image_mime(mime) {
            return None;
        }
        Some(self.ingest(file_name))
    }

    /// Store a finished preview read, unless a newer ingest superseded it.
    pub fn preview_ready(&mut self, generation: u64, data_url: String) -> bool {
        if !self.token.is_current(generation) {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// Start an analysis: returns the preview payload plus the generation
    /// to run under, or `None` (a no-op, no network call) when no image and
    /// preview are loaded or one analysis is already in flight.
    pub fn begin_analysis(&mut self) -> Option<(String, u64)> {
        if self.analyzing || self.file_name.is_none() {
            return None;
        }
        let preview = self.preview.clone()?;
        self.analyzing = true;
        self.progress = PROGRESS_IDLE;
        self.result = None;
        self.suggestions = None;
        self.suggestions_loading = false;
        Some((preview, self.token.renew()))
    }

    /// Record a progress phase for a still-current analysis.
    pub fn record_progress(&mut self, generation: u64, phase: u8) -> bool {
        if !self.token.is_current(generation) {
            return false;
        }
        self.progress = phase;
        true
    }

    /// Record the predict outcome. A stale outcome is discarded. Returns
    /// the label to chain a suggestions fetch for: successful and
    /// non-sentinel only.
    pub fn finish_analysis(
        &mut self,
        generation: u64,
        outcome: Result<Prediction, AnalysisError>,
    ) -> Option<String> {
        if !self.token.is_current(generation) {
            return None;
        }
        self.analyzing = false;
        let chained = match &outcome {
            Ok(prediction) if wants_suggestions(&prediction.label) => {
                self.suggestions_loading = true;
                Some(prediction.label.clone())
            }
            _ => None,
        };
        self.result = Some(outcome);
        chained
    }

    /// Record fetched suggestion text; stale text is discarded.
    pub fn finish_suggestions(&mut self, generation: u64, text: String) -> bool {
        if !self.token.is_current(generation) {
            return false;
        }
        self.suggestions_loading = false;
        self.suggestions = Some(text);
        true
    }

    /// Assemble the report download, or `None` (a no-op) when no
    /// successful result is present.
    pub fn export_report(&self) -> Option<(String, String)> {
        match &self.result {
            Some(Ok(prediction)) => Some((
                report_filename(&prediction.label),
                build_report(prediction, self.suggestions.as_deref()),
            )),
            _ => None,
        }
    }
}

/// Drive the predict call for one analysis invocation.
///
/// Strips the data-URI prefix (an empty payload fails immediately, without
/// touching the network), then runs the call under `policy`. The progress
/// callback sees 25 before the first send, 75 after each received
/// response (a transport failure produced none, so it stays put), and 100
/// on success. The error of the final attempt is returned as-is.
pub async fn run_prediction<B, Sl, SlFut, P>(
    backend: &B,
    policy: &RetryPolicy,
    preview_data_url: &str,
    sleep: Sl,
    progress: P,
) -> Result<Prediction, AnalysisError>
where
    B: DiagnosisBackend,
    Sl: Fn(Duration) -> SlFut,
    SlFut: Future<Output = ()>,
    P: Fn(u8),
{
    progress(PROGRESS_REQUEST_SENT);
    let progress_ref = &progress;
    let outcome = policy
        .run(
            |_attempt| {
                let payload = strip_data_url(preview_data_url);
                async move {
                    let payload = payload?;
                    let result = backend.predict(payload).await;
                    if !matches!(result, Err(AnalysisError::Connection)) {
                        progress_ref(PROGRESS_RESPONSE_RECEIVED);
                    }
                    result
                }
            },
            sleep,
        )
        .await;

    if outcome.is_ok() {
        progress(PROGRESS_COMPLETE);
    }
    outcome
}

/// Fetch advisory text for a completed diagnosis. One shot, never retried,
/// and never fatal: every failure collapses into a fixed fallback string so
/// the prediction stays on screen regardless.
pub async fn fetch_suggestions<B: DiagnosisBackend>(backend: &B, diagnosis: &str) -> String {
    match backend.suggestions(diagnosis).await {
        Ok(response) => match response.suggestions {
            Some(text) if !text.trim().is_empty() => text,
            _ => SUGGESTIONS_MISSING.to_string(),
        },
        Err(_) => SUGGESTIONS_UNAVAILABLE.to_string(),
    }
}
