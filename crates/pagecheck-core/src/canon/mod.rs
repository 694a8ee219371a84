//! Canonical URL form: validation and normalization.
//!
//! A registered URL is stored as lowercase `scheme://host`, which is the
//! dedup key for the whole registry. Validation and normalization are
//! independent steps: [`validate`] gates raw user input and can reject it,
//! [`normalize`] reduces any string to the canonical form and never fails.

mod normalize;
mod validate;

pub use normalize::normalize;
pub use validate::{validate, InvalidUrl, MAX_URL_LEN};
