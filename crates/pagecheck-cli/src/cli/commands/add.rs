//! `pagecheck add <url>` – validate, canonicalize, and register a URL.

use anyhow::Result;
use pagecheck_core::canon;
use pagecheck_core::store::{SaveUrlError, UrlStore};

pub async fn run_add(store: &UrlStore, url: &str) -> Result<()> {
    match store.save_url(url).await {
        Ok(id) => {
            println!("Added url {id}: {}", canon::normalize(url));
            Ok(())
        }
        Err(SaveUrlError::Duplicate { existing_id }) => {
            // Already registered is informational, not a failure.
            println!("URL already registered with id {existing_id}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
