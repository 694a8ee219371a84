//! Registered-URL operations: save, lookup, list.

use sqlx::Row;
use thiserror::Error;

use super::db::{unix_timestamp, UrlStore};
use super::types::{Url, UrlId, UrlSummary};
use crate::canon::{self, InvalidUrl};

/// Why a submitted URL was not saved.
#[derive(Debug, Error)]
pub enum SaveUrlError {
    /// Input failed validation; nothing was stored.
    #[error(transparent)]
    Invalid(#[from] InvalidUrl),
    /// The canonical form is already registered. A soft condition, not a
    /// hard failure: callers usually point the user at the existing row.
    #[error("URL already registered with id {existing_id}")]
    Duplicate { existing_id: UrlId },
    /// Underlying database failure.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl UrlStore {
    /// Validate, canonicalize, and register a URL submitted by a user.
    ///
    /// Returns the new row's id. Submitting anything that reduces to an
    /// already-registered canonical form yields
    /// [`SaveUrlError::Duplicate`] carrying the existing id instead of a
    /// second row; losing an insert race to a concurrent save of the same
    /// name reports the same way.
    pub async fn save_url(&self, raw: &str) -> Result<UrlId, SaveUrlError> {
        canon::validate(raw)?;
        let name = canon::normalize(raw);

        if let Some(existing_id) = self.url_id_by_name(&name).await? {
            return Err(SaveUrlError::Duplicate { existing_id });
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO urls (name, created_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&name)
        .bind(unix_timestamp())
        .execute(&self.pool)
        .await;

        match inserted {
            Ok(result) => {
                let id = result.last_insert_rowid();
                tracing::info!(id, name = %name, "registered url");
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => {
                // Lost the insert race; report the row that won.
                match self.url_id_by_name(&name).await? {
                    Some(existing_id) => Err(SaveUrlError::Duplicate { existing_id }),
                    None => Err(SaveUrlError::Db(err)),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fetch one registered URL by id.
    pub async fn find_url(&self, id: UrlId) -> Result<Option<Url>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM urls
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Url {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
        }))
    }

    /// Look up the id registered for a canonical name, if any.
    pub async fn url_id_by_name(&self, name: &str) -> Result<Option<UrlId>, sqlx::Error> {
        let row = sqlx::query("SELECT id FROM urls WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| row.get("id")))
    }

    /// List every registered URL, newest first, each with the status and
    /// time of its most recent check.
    pub async fn list_urls(&self) -> Result<Vec<UrlSummary>, sqlx::Error> {
        // Correlated subquery picks each URL's latest check row; ties on
        // created_at resolve to the highest id (the later insert).
        let rows = sqlx::query(
            r#"
            SELECT urls.id, urls.name, urls.created_at,
                   latest.status_code AS last_status,
                   latest.created_at AS last_checked_at
            FROM urls
            LEFT JOIN url_checks AS latest
                ON latest.url_id = urls.id
               AND latest.id = (
                   SELECT id FROM url_checks
                   WHERE url_id = urls.id
                   ORDER BY created_at DESC, id DESC
                   LIMIT 1
               )
            ORDER BY urls.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let last_status: Option<i64> = row.get("last_status");
            out.push(UrlSummary {
                id: row.get("id"),
                name: row.get("name"),
                created_at: row.get("created_at"),
                last_status: last_status.map(|code| code as u16),
                last_checked_at: row.get("last_checked_at"),
            });
        }
        Ok(out)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
