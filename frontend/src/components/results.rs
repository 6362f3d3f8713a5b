//! Status line, result table and CSV download.

use invoice_extractor::Phase;
use leptos::*;

use crate::services::offer_download;
use crate::types::WebFlow;

/// Idle prompt, spinner text, success banner or error, depending on the flow.
///
/// A rejected file takes the place of the idle prompt until another file is picked.
#[component]
pub fn StatusBanner(flow: ReadSignal<WebFlow>, rejected: ReadSignal<Option<String>>) -> impl IntoView {
    let status = move || {
        if let Some(reason) = rejected.get() {
            return Some(("error-message", reason));
        }
        flow.with(|f| {
            f.status_message().map(|message| {
                let class = match f.phase() {
                    Phase::Idle | Phase::FileSelected => "info-message",
                    Phase::Requesting => "pending-message",
                    Phase::Success => "success-message",
                    Phase::BackendError | Phase::TransportError => "error-message",
                };
                (class, message.into_owned())
            })
        })
    };

    view! {
        <div class="status">
            {move || status().map(|(class, message)| view! { <div class=class>{message}</div> })}
        </div>
    }
}

/// Single-row table plus the download button, only after a successful extraction.
#[component]
pub fn ResultSection(flow: ReadSignal<WebFlow>) -> impl IntoView {
    let table = move || {
        flow.with(|f| {
            f.result().map(|result| {
                let columns: Vec<String> = result.columns().map(str::to_string).collect();
                (columns, result.row())
            })
        })
    };

    let on_download = move |_| {
        if let Some(download) = flow.with_untracked(|f| f.download().cloned()) {
            if let Err(e) = offer_download(&download) {
                log::error!("❌ Download failed: {}", e);
            }
        }
    };

    view! {
        <Show
            when=move || flow.with(|f| f.result().is_some())
            fallback=|| view! { }
        >
            <div class="result-section" id="resultSection">
                <table class="result-table">
                    {move || table().map(|(columns, row)| view! {
                        <thead>
                            <tr>{columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
                        </thead>
                        <tbody>
                            <tr>{row.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}</tr>
                        </tbody>
                    })}
                </table>
                <button class="btn btn-secondary" id="downloadBtn" on:click=on_download>
                    "⬇️ Download as CSV"
                </button>
            </div>
        </Show>
    }
}
