//! Progress bar component
//!
//! Coarse workflow-phase indicator (0 / 25 / 75 / 100), not byte-level
//! upload progress.

use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get())
                />
            </div>
            <p class="progress-text">
                {move || format!("Processing scan... {}%", progress.get())}
            </p>
        </div>
    }
}
