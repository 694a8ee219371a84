//! CLI command handlers. Each command is in its own file for clarity.

mod add;
mod check;
mod list;
mod show;

pub use add::run_add;
pub use check::run_check;
pub use list::run_list;
pub use show::run_show;

use chrono::DateTime;

/// Renders a Unix-seconds timestamp as UTC `YYYY-MM-DD HH:MM:SS`.
pub(crate) fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Clips long cell text so table rows stay on one line.
pub(crate) fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
