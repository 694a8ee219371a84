//! Row types for the URL registry.

use serde::Serialize;

/// Registered-URL identifier (SQLite rowid).
pub type UrlId = i64;

/// A registered URL. Immutable once inserted; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Url {
    pub id: UrlId,
    /// Canonical `scheme://host` form; unique across the registry.
    pub name: String,
    /// Registration time, Unix seconds.
    pub created_at: i64,
}

/// One recorded check: a point-in-time metadata snapshot of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlCheck {
    pub id: i64,
    pub url_id: UrlId,
    /// HTTP status of the final response.
    pub status_code: u16,
    /// Text of the page's first `<h1>`; empty when it had none.
    pub h1: String,
    /// Text of the `<title>`; empty when absent.
    pub title: String,
    /// Meta description, when the page carried one.
    pub description: Option<String>,
    /// Check time, Unix seconds.
    pub created_at: i64,
}

/// List view of a registered URL: the row plus its latest check, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlSummary {
    pub id: UrlId,
    pub name: String,
    /// Registration time, Unix seconds.
    pub created_at: i64,
    /// Status code of the most recent check, for URLs checked at least once.
    pub last_status: Option<u16>,
    /// Time of the most recent check, Unix seconds.
    pub last_checked_at: Option<i64>,
}
