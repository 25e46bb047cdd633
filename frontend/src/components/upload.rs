//! Legal document upload page.
//!
//! Handles file selection, upload to the backend and the hand-off of
//! the analysis to the results page.

use leptos::*;
use leptos_router::use_navigate;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{AnalyzingSpinner, MessageBanner};
use crate::services::{upload_document, SharedStore};
use crate::{api_base_url, file_hint, UploadState, ACCEPTED_FILE_TYPES};

#[component]
pub fn UploadView(store: SharedStore) -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::new());
    let file_input = create_node_ref::<html::Input>();
    let navigate = use_navigate();

    // Clicking the box opens the hidden file input
    let open_file_dialog = move |_| {
        state.update(|s| s.request_file_dialog());
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        state.update(|s| s.choose_file(file));
    };

    let on_reset = move |_| {
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
        state.update(|s| s.reset_selection());
    };

    let on_analyze = move |_| {
        // No file: the error message is already set, nothing to send
        let Some(file) = state.try_update(|s| s.begin_analysis().ok()).flatten() else {
            return;
        };

        let store = store.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = upload_document(&file, api_base_url()).await;
            let route = state
                .try_update(|s| s.finish_analysis(outcome, &*store))
                .flatten();

            if let Some(route) = route {
                navigate(route, Default::default());
            }
        });
    };

    let message = Signal::derive(move || state.with(|s| s.status()));

    view! {
        <div class="upload-page">
            <Show
                when=move || state.with(|s| s.shows_upload_box())
                fallback=|| view! { }
            >
                <div>
                    <h1>"Upload Your Legal Document"</h1>
                    <p class="subtitle">
                        {file_hint()}
                    </p>

                    <div class="upload-box" on:click=open_file_dialog>
                        <div class="upload-icon">"📤"</div>
                        <p>"Drag and drop your file or click to browse"</p>
                        <button class="upload-button">"Upload Document"</button>
                    </div>
                </div>
            </Show>

            <input
                type="file"
                node_ref=file_input
                accept=ACCEPTED_FILE_TYPES
                style="display:none"
                on:change=on_file_change
            />

            <Show
                when=move || state.with(|s| s.shows_reset_control())
                fallback=|| view! { }
            >
                <div class="reset-container">
                    <button class="reset-button" on:click=on_reset>
                        "Remove File ❌"
                    </button>
                </div>
            </Show>

            <MessageBanner message=message/>

            <p class="footer-note">"Your documents are kept secure and confidential."</p>

            <div class="analyze-section">
                <button
                    class="analyze-button"
                    on:click=on_analyze
                    disabled=move || state.with(|s| s.analyze_disabled())
                >
                    {move || state.with(|s| s.analyze_label())}
                </button>

                <Show
                    when=move || state.with(|s| s.shows_progress())
                    fallback=|| view! { }
                >
                    <AnalyzingSpinner/>
                </Show>
            </div>
        </div>
    }
}
