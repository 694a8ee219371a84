//! `pagecheck show <id>` – one URL plus its full check history.

use anyhow::{bail, Result};
use pagecheck_core::store::UrlStore;

use super::{clip, format_timestamp};

pub async fn run_show(store: &UrlStore, id: i64, json: bool) -> Result<()> {
    let Some(url) = store.find_url(id).await? else {
        bail!("no URL registered with id {id}");
    };
    let checks = store.checks_for_url(id).await?;

    if json {
        let payload = serde_json::json!({ "url": url, "checks": checks });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Url {}: {}", url.id, url.name);
    println!("Added: {}", format_timestamp(url.created_at));

    if checks.is_empty() {
        println!("No checks recorded.");
        return Ok(());
    }

    println!();
    println!(
        "{:<6} {:<8} {:<20} {:<26} {:<26} {}",
        "ID", "STATUS", "CHECKED", "TITLE", "H1", "DESCRIPTION"
    );
    for c in checks {
        println!(
            "{:<6} {:<8} {:<20} {:<26} {:<26} {}",
            c.id,
            c.status_code,
            format_timestamp(c.created_at),
            clip(&c.title, 24),
            clip(&c.h1, 24),
            c.description.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
