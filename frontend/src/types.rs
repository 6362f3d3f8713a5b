//! Common types used across the frontend application.

use invoice_extractor::Flow;
use web_sys::File;

/// Interaction state held by the page: the flow over a browser file handle.
pub type WebFlow = Flow<File>;

/// Human-readable file size.
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(2048.0), "2.0 KB");
        assert_eq!(format_size(3.5 * 1024.0 * 1024.0), "3.5 MB");
    }
}
