//! `pagecheck list` – show all registered URLs with their latest check.

use anyhow::Result;
use pagecheck_core::store::UrlStore;

use super::format_timestamp;

pub async fn run_list(store: &UrlStore, json: bool) -> Result<()> {
    let urls = store.list_urls().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
        return Ok(());
    }

    if urls.is_empty() {
        println!("No URLs registered.");
        return Ok(());
    }

    println!("{:<6} {:<40} {:<8} {}", "ID", "NAME", "STATUS", "LAST CHECKED");
    for u in urls {
        let status = u
            .last_status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let checked = u
            .last_checked_at
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        println!("{:<6} {:<40} {:<8} {}", u.id, u.name, status, checked);
    }
    Ok(())
}
