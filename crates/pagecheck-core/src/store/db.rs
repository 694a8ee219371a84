//! SQLite-backed store implementation.
//!
//! Handles connection, migrations, and timestamp helpers. URL CRUD lives
//! in `urls`, check history in `checks`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AppConfig;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special
/// chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed URL registry.
///
/// Holds an explicit connection pool; every operation checks a connection
/// out for its own scope, so one handle can be cloned and shared freely.
/// The default database file is stored under the XDG state directory:
/// `~/.local/state/pagecheck/pagecheck.db`.
#[derive(Clone)]
pub struct UrlStore {
    pub(crate) pool: Pool<Sqlite>,
}

impl UrlStore {
    /// Open the store described by `cfg` and run migrations.
    ///
    /// `DATABASE_URL` (or the config file's `database_url`) may name a
    /// `sqlite:` URI or a plain path; unset means the default database
    /// under the XDG state directory.
    pub async fn open(cfg: &AppConfig) -> Result<Self> {
        match cfg.database_url() {
            Some(spec) => Self::open_spec(&spec).await,
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("pagecheck")?;
                let db_path = xdg_dirs.place_state_file("pagecheck.db")?;
                Self::open_at(&db_path).await
            }
        }
    }

    /// Open (or create) the database at a specific path. Creates parent
    /// dirs if needed. Also used by tests to place the DB in a temp dir.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        Self::connect(&uri).await
    }

    /// Open from a connection spec: a `sqlite:` URI used verbatim, or a
    /// filesystem path.
    pub async fn open_spec(spec: &str) -> Result<Self> {
        if spec.starts_with("sqlite:") {
            Self::connect(spec).await
        } else {
            Self::open_at(spec).await
        }
    }

    async fn connect(uri: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(uri)
            .await?;

        let store = UrlStore { pool };
        store.migrate().await?;
        tracing::debug!("opened url store at {}", uri);
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        // Two-table schema: registered URLs and their check history.
        //
        // - `urls.name` is the canonical `scheme://host` form and the
        //   dedup key for the registry.
        // - `url_checks` is append-only; rows are never updated or
        //   deleted, so a URL's history is a faithful timeline.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url_checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url_id INTEGER NOT NULL REFERENCES urls(id),
                status_code INTEGER NOT NULL,
                h1 TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_url_checks_url_id ON url_checks(url_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for `created_at` columns). Pub for use by
/// the `urls` and `checks` modules.
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<UrlStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let store = UrlStore { pool };
    store.migrate().await?;
    Ok(store)
}
