//! Browser-side services.
//!
//! - [`extract`] - multipart upload to the extraction backend
//! - [`download`] - hand the CSV artifact to the browser

pub mod extract;
pub mod download;

pub use extract::*;
pub use download::*;
