//! Diagnosis page: the workflow controller
//!
//! All session state lives in one [`DiagnosisSession`] signal; the
//! handlers here only forward browser events into its transitions and
//! spawn the async work it approves. Selecting a new image renews the
//! session generation, so responses still in flight for the previous
//! scan are discarded instead of overwriting newer state.

use std::time::Duration;

use gloo::timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use neuroscan_common::{fetch_suggestions, run_prediction, DiagnosisSession, RetryPolicy};

use crate::api::backend::{backend_config, HttpBackend};
use crate::components::results_panel::ResultsPanel;
use crate::components::upload_area::{read_data_url, UploadArea};
use crate::export;

async fn retry_delay(delay: Duration) {
    TimeoutFuture::new(delay.as_millis() as u32).await;
}

#[component]
pub fn DiagnosisPage() -> impl IntoView {
    let session = RwSignal::new(DiagnosisSession::new());
    let backend = HttpBackend::new(backend_config());
    let file_input: NodeRef<Input> = NodeRef::new();

    // the reader fills the preview in later; the session drops the result
    // if another ingest happened in between
    let read_preview = move |file: File, generation: u64| {
        read_data_url(&file, move |data_url| {
            session.update(|s| {
                s.preview_ready(generation, data_url);
            });
        });
    };

    let on_pick = move |file: File| {
        if let Some(generation) = session.try_update(|s| s.ingest(&file.name())) {
            read_preview(file, generation);
        }
    };

    // dropped files go through the session's MIME gate; a rejected drop
    // changes nothing
    let on_drop_file = move |file: File| {
        let accepted = session.try_update(|s| s.ingest_drop(&file.name(), &file.type_()));
        if let Some(Some(generation)) = accepted {
            read_preview(file, generation);
        }
    };

    let on_analyze = {
        let backend = backend.clone();
        move |_| {
            let started = session.try_update(|s| s.begin_analysis()).flatten();
            let Some((preview_url, generation)) = started else {
                return;
            };

            let backend = backend.clone();
            spawn_local(async move {
                let outcome = run_prediction(
                    &backend,
                    &RetryPolicy::default(),
                    &preview_url,
                    retry_delay,
                    move |phase| {
                        session.update(|s| {
                            s.record_progress(generation, phase);
                        });
                    },
                )
                .await;

                let chained = session
                    .try_update(|s| s.finish_analysis(generation, outcome))
                    .flatten();

                if let Some(label) = chained {
                    let text = fetch_suggestions(&backend, &label).await;
                    session.update(|s| {
                        s.finish_suggestions(generation, text);
                    });
                }
            });
        }
    };

    let on_export = move |_| {
        let Some((filename, report)) = session.with_untracked(|s| s.export_report()) else {
            return;
        };
        export::download_text(&filename, "text/plain", &report);
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let preview = Signal::derive(move || session.with(|s| s.preview().map(str::to_string)));
    let analyzing = Signal::derive(move || session.with(|s| s.is_analyzing()));
    let progress = Signal::derive(move || session.with(|s| s.progress()));
    let result = Signal::derive(move || session.with(|s| s.result().cloned()));
    let suggestions = Signal::derive(move || session.with(|s| s.suggestions().map(str::to_string)));
    let suggestions_loading = Signal::derive(move || session.with(|s| s.suggestions_loading()));
    let has_file = Signal::derive(move || session.with(|s| s.file_name().is_some()));

    view! {
        <div class="diagnosis">
            <h1>"MRI Analysis Dashboard"</h1>

            <div class="diagnosis-grid">
                <div class="card upload-card">
                    <UploadArea
                        preview=preview
                        file_input=file_input
                        on_pick=on_pick
                        on_drop_file=on_drop_file
                    />
                    <div class="button-row">
                        <button class="btn btn-secondary" on:click=open_picker>
                            "Select File"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || !has_file.get() || analyzing.get()
                            on:click=on_analyze
                        >
                            {move || if analyzing.get() { "Analyzing..." } else { "Analyze" }}
                        </button>
                    </div>
                </div>

                <div class="card">
                    <ResultsPanel
                        analyzing=analyzing
                        progress=progress
                        result=result
                        suggestions=suggestions
                        suggestions_loading=suggestions_loading
                        on_export=on_export
                    />
                </div>
            </div>
        </div>
    }
}
