//! Persistent URL registry with append-only check history.
//!
//! The store owns the two tables (`urls`, `url_checks`) and is the only
//! caller of the canonicalization rules and the page checker: saving runs
//! validate-then-normalize, [`UrlStore::run_check`] runs the fetch and
//! appends the outcome. URL rows are immutable once inserted and never
//! deleted; history only grows.

pub mod db;
pub mod types;

mod checks;
mod urls;

#[cfg(test)]
mod tests;

pub use checks::RunCheckError;
pub use db::UrlStore;
pub use types::*;
pub use urls::SaveUrlError;
