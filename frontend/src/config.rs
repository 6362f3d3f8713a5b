//! Application configuration.
//!
//! Endpoint, accepted types and UI strings come from the shared crate so
//! the web and terminal front-ends stay in step. Only browser-specific
//! values live here.

pub use invoice_extractor::config::*;

/// `accept` attribute of the file input.
pub const ACCEPT_ATTR: &str = ".pdf,.jpg,.jpeg,.png";

/// Short description shown under the title.
pub const APP_DESCRIPTION: &str = "Upload an invoice PDF or image, and this app will extract:";

/// Fields listed in the description, with their icons.
pub const EXTRACTED_FIELDS: [(&str, &str); 3] = [
    ("🗓", "Date"),
    ("📝", "Description"),
    ("💰", "Tax Amount"),
];
