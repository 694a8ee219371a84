//! Check-history operations: the check runner, append, and listing.

use sqlx::Row;
use thiserror::Error;

use super::db::{unix_timestamp, UrlStore};
use super::types::{UrlCheck, UrlId};
use crate::checker::{CheckError, CheckOutcome, PageChecker};

/// Why a requested check left no history row.
#[derive(Debug, Error)]
pub enum RunCheckError {
    /// No URL registered under this id.
    #[error("no URL registered with id {0}")]
    UnknownUrl(UrlId),
    /// The fetch failed; nothing was recorded.
    #[error(transparent)]
    Failed(#[from] CheckError),
    /// Underlying database failure.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl UrlStore {
    /// Run one page check for the URL registered under `id` and append
    /// the outcome to its history.
    ///
    /// The stored canonical name is what gets fetched. A failed fetch
    /// records nothing: history rows exist only for completed checks.
    pub async fn run_check(
        &self,
        checker: &PageChecker,
        id: UrlId,
    ) -> Result<UrlCheck, RunCheckError> {
        let url = self
            .find_url(id)
            .await?
            .ok_or(RunCheckError::UnknownUrl(id))?;

        let outcome = match checker.check(&url.name).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(id, url = %url.name, error = ?err, "check failed");
                return Err(err.into());
            }
        };

        Ok(self.add_check(id, &outcome).await?)
    }

    /// Append one check outcome to a URL's history.
    pub async fn add_check(
        &self,
        url_id: UrlId,
        outcome: &CheckOutcome,
    ) -> Result<UrlCheck, sqlx::Error> {
        let now = unix_timestamp();
        let id = sqlx::query(
            r#"
            INSERT INTO url_checks (url_id, status_code, h1, title, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(url_id)
        .bind(outcome.status_code as i64)
        .bind(&outcome.h1)
        .bind(&outcome.title)
        .bind(outcome.description.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!(url_id, check_id = id, status = outcome.status_code, "recorded check");

        Ok(UrlCheck {
            id,
            url_id,
            status_code: outcome.status_code,
            h1: outcome.h1.clone(),
            title: outcome.title.clone(),
            description: outcome.description.clone(),
            created_at: now,
        })
    }

    /// Check history for one URL, newest first.
    pub async fn checks_for_url(&self, url_id: UrlId) -> Result<Vec<UrlCheck>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, url_id, status_code, h1, title, description, created_at
            FROM url_checks
            WHERE url_id = ?1
            ORDER BY id DESC
            "#,
        )
        .bind(url_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let status_code: i64 = row.get("status_code");
            out.push(UrlCheck {
                id: row.get("id"),
                url_id: row.get("url_id"),
                status_code: status_code as u16,
                h1: row.get("h1"),
                title: row.get("title"),
                description: row.get("description"),
                created_at: row.get("created_at"),
            });
        }
        Ok(out)
    }
}
