//! Hero section component

use leptos::*;

use crate::config::{APP_DESCRIPTION, APP_TITLE, EXTRACTED_FIELDS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">{APP_DESCRIPTION}</p>
            <ul class="field-list">
                {EXTRACTED_FIELDS
                    .iter()
                    .map(|(icon, label)| view! { <li>{*icon} " " <strong>{*label}</strong></li> })
                    .collect_view()}
            </ul>
            <p class="subtitle">"All for free, no API keys needed."</p>
        </div>
    }
}
