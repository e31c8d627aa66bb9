//! Upload drop zone component
//!
//! Purely DOM-side: it extracts the first file from a pick or drop and
//! forwards it. Whether a dropped file is accepted is the session's call,
//! not this component's; the file picker is constrained by `accept`.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<P, D>(
    preview: Signal<Option<String>>,
    file_input: NodeRef<Input>,
    on_pick: P,
    on_drop_file: D,
) -> impl IntoView
where
    P: Fn(File) + 'static + Clone + Send,
    D: Fn(File) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_drop_file = on_drop_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_drop_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    let on_change = {
        let on_pick = on_pick.clone();
        move |_| {
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_pick(file);
            }
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=open_picker
        >
            <Show
                when=move || preview.get().is_some()
                fallback=|| view! {
                    <div class="upload-placeholder">
                        <div class="upload-icon">"⬆"</div>
                        <p class="text-muted">"Drag and drop your MRI scan or click to upload"</p>
                    </div>
                }
            >
                <img
                    class="upload-preview"
                    src=move || preview.get().unwrap_or_default()
                    alt="MRI Preview"
                />
            </Show>
        </div>
        <input
            type="file"
            accept="image/*"
            class="hidden-input"
            node_ref=file_input
            on:change=on_change
        />
    }
}

/// Read a file into a base64 data URL and hand it to the callback once
/// the browser finishes. The read is asynchronous; callers that care
/// about staleness check their session generation in `on_loaded`.
pub fn read_data_url<F>(file: &File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(file);
}
