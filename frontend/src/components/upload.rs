//! Invoice file selection and the extract trigger.
//!
//! Selecting a file only updates the flow; the request goes out when the
//! user presses the button. The `accept` attribute is only a hint to the
//! picker, so the file name is checked again against the allow-list.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::{ACCEPT_ATTR, BACKEND_URL, PENDING_MESSAGE};
use crate::services::extract_invoice;
use crate::types::{format_size, WebFlow};

#[component]
pub fn UploadSection(
    flow: ReadSignal<WebFlow>,
    set_flow: WriteSignal<WebFlow>,
    set_rejected: WriteSignal<Option<String>>,
) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        let mut rejection = None;
        set_flow.update(|flow| match file {
            Some(file) => {
                let name = file.name();
                match flow.select_checked(&name, file) {
                    Ok(_) => log::info!("📄 Selected {}", name),
                    Err(e) => {
                        log::warn!("⚠️ {}: {}", name, e);
                        rejection = Some(e.to_string());
                    }
                }
            }
            None => flow.clear(),
        });

        if rejection.is_some() {
            input.set_value("");
        }
        set_rejected.set(rejection);
    };

    let on_extract = move |_| {
        let mut file = None;
        set_flow.update(|flow| file = flow.trigger().cloned());
        let Some(file) = file else {
            return;
        };
        set_rejected.set(None);

        spawn_local(async move {
            let outcome = extract_invoice(&file, BACKEND_URL).await;
            match &outcome {
                Ok(result) => log::info!("✅ Extracted {} fields", result.len()),
                Err(e) => log::error!("❌ {}", e),
            }
            set_flow.update(|flow| {
                flow.complete(outcome);
            });
        });
    };

    let has_file = move || flow.with(|f| f.file().is_some());
    let is_requesting = move || flow.with(|f| f.is_requesting());
    let selected = move || {
        flow.with(|f| {
            f.file()
                .map(|file| format!("{} ({})", file.name(), format_size(file.size())))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📤"</div>
            <label for="fileInput" class="upload-text">
                "Upload Invoice File (PDF/JPG/PNG)"
            </label>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPT_ATTR
                disabled=is_requesting
                on:change=on_file_change
            />

            <Show
                when=has_file
                fallback=|| view! { }
            >
                <div class="upload-hint">{selected}</div>
                <button
                    class="btn btn-primary"
                    id="extractBtn"
                    on:click=on_extract
                    disabled=is_requesting
                >
                    {move || if is_requesting() { PENDING_MESSAGE } else { "🚀 Extract Data" }}
                </button>
            </Show>
        </div>
    }
}
