//! `pagecheck check <id>` – run one page check and record the outcome.

use anyhow::Result;
use pagecheck_core::checker::PageChecker;
use pagecheck_core::store::UrlStore;

use super::format_timestamp;

pub async fn run_check(
    store: &UrlStore,
    checker: &PageChecker,
    id: i64,
    json: bool,
) -> Result<()> {
    // Any fetch failure surfaces as the runner's error; nothing is
    // recorded and the process exits non-zero with a uniform notice.
    let check = store.run_check(checker, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&check)?);
        return Ok(());
    }

    let title = if check.title.is_empty() { "-" } else { check.title.as_str() };
    let h1 = if check.h1.is_empty() { "-" } else { check.h1.as_str() };

    println!("Checked url {id}: HTTP {}", check.status_code);
    println!("  checked at:  {}", format_timestamp(check.created_at));
    println!("  title:       {title}");
    println!("  h1:          {h1}");
    println!("  description: {}", check.description.as_deref().unwrap_or("-"));
    Ok(())
}
