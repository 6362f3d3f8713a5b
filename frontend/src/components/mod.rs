//! UI Components for the Invoice Extractor page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File input and the extract button
//! - [`StatusBanner`] - Idle prompt, progress, success or error message
//! - [`ResultSection`] - Result table and CSV download

mod hero;
mod upload;
mod results;
mod footer;

pub use hero::*;
pub use upload::*;
pub use results::*;
pub use footer::*;
