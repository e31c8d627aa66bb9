//! Analysis results panel
//!
//! Renders one of three branches: in-flight progress, a completed result
//! (with confidence bar and suggestions), or the terminal failure text.
//! Failures occupy the same slot as a successful label; the confidence
//! bar is simply absent.

use leptos::prelude::*;

use neuroscan_common::{AnalysisError, Prediction};

use crate::components::progress_bar::ProgressBar;

const ADVISORY: &str = "This is an AI-assisted analysis. Please consult with a healthcare \
professional for accurate medical advice.";

#[component]
pub fn ResultsPanel<F>(
    analyzing: Signal<bool>,
    progress: Signal<u8>,
    result: Signal<Option<Result<Prediction, AnalysisError>>>,
    suggestions: Signal<Option<String>>,
    suggestions_loading: Signal<bool>,
    on_export: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="results-panel">
            <h2>
                "Analysis Results"
                <Show when=move || analyzing.get()>
                    <span class="spinner" />
                </Show>
            </h2>

            {move || {
                if analyzing.get() {
                    return view! { <ProgressBar progress=progress /> }.into_any();
                }
                match result.get() {
                    Some(Ok(prediction)) => {
                        let on_export = on_export.clone();
                        view! {
                            <ResultCard
                                prediction=prediction
                                suggestions=suggestions
                                suggestions_loading=suggestions_loading
                                on_export=on_export
                            />
                        }
                        .into_any()
                    }
                    Some(Err(error)) => view! {
                        <div class="result-card result-error">
                            <p class="result-label">{error.user_message()}</p>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="results-empty">
                            "Upload an MRI scan to begin analysis"
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ResultCard<F>(
    prediction: Prediction,
    suggestions: Signal<Option<String>>,
    suggestions_loading: Signal<bool>,
    on_export: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let percent = prediction.confidence_percent();
    let bar_width = format!("width: {:.1}%", prediction.confidence * 100.0);

    view! {
        <div class="result-card">
            <div class="result-heading">
                <span class="result-check">"✓"</span>
                <h3>"Diagnosis Result:"</h3>
            </div>
            <p class="result-label">{prediction.label.clone()}</p>
            <div class="confidence-row">
                <div class="confidence-bar">
                    <div class="confidence-fill" style=bar_width />
                </div>
                <span class="confidence-text">{percent}</span>
            </div>

            <div class="suggestions-block">
                <h4>"AI Suggestions"</h4>
                {move || {
                    if suggestions_loading.get() {
                        view! { <p class="text-muted">"Fetching suggestions..."</p> }.into_any()
                    } else {
                        match suggestions.get() {
                            Some(text) => {
                                view! { <pre class="suggestions-text">{text}</pre> }.into_any()
                            }
                            None => view! { <span class="suggestions-empty" /> }.into_any(),
                        }
                    }
                }}
            </div>

            <div class="advisory">
                <span class="advisory-icon">"⚠"</span>
                <p class="text-muted">{ADVISORY}</p>
            </div>

            <button
                class="btn btn-secondary"
                on:click=move |_| on_export(())
            >
                "Download Report"
            </button>
        </div>
    }
}
