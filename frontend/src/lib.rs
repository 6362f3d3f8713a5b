//! Invoice Extractor - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for sending an invoice to the extraction backend
//! and downloading the extracted fields as CSV.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the flow signal)                          │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file input, extract button)             │
//! │  ├── StatusBanner (idle / pending / success / error)        │
//! │  └── ResultSection (table, CSV download, on success)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Flow over browser files, formatting helpers
//! - [`components`] - UI components
//! - [`services`] - Backend communication and downloads

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{format_size, WebFlow};
pub use components::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The one piece of interaction state: rewritten on every transition
    let (flow, set_flow) = create_signal(WebFlow::new());
    // Why the last picked file was refused, until the next pick
    let (rejected, set_rejected) = create_signal(None::<String>);

    view! {
        <div class="container">
            <Hero/>
            <UploadSection flow=flow set_flow=set_flow set_rejected=set_rejected/>
            <StatusBanner flow=flow rejected=rejected/>
            <ResultSection flow=flow/>
        </div>

        <Footer/>
    }
}
