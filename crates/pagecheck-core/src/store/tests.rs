//! Tests for the store (use the in-memory DB helper from db).

use crate::canon::InvalidUrl;
use crate::checker::{CheckOutcome, PageChecker};
use crate::store::db::open_memory;
use crate::store::{RunCheckError, SaveUrlError};

fn outcome(status_code: u16) -> CheckOutcome {
    CheckOutcome {
        status_code,
        h1: "Welcome".to_string(),
        title: "Front Page".to_string(),
        description: Some("What this site is about.".to_string()),
    }
}

#[tokio::test]
async fn save_and_find_url() {
    let store = open_memory().await.unwrap();
    let id = store.save_url("HTTPS://Example.COM/some/page?x=1").await.unwrap();

    let url = store.find_url(id).await.unwrap().expect("url exists");
    assert_eq!(url.id, id);
    // Stored under the canonical form, not the submitted one.
    assert_eq!(url.name, "https://example.com");
    assert!(url.created_at > 0);

    assert!(store.find_url(id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn url_id_by_name_matches_canonical_form_only() {
    let store = open_memory().await.unwrap();
    let id = store.save_url("https://example.com/page").await.unwrap();

    assert_eq!(
        store.url_id_by_name("https://example.com").await.unwrap(),
        Some(id)
    );
    // Raw (non-canonical) forms are not names.
    assert_eq!(
        store.url_id_by_name("https://example.com/page").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn duplicate_save_reports_existing_id() {
    let store = open_memory().await.unwrap();
    let first = store.save_url("https://example.com/a").await.unwrap();

    // A different raw spelling of the same canonical form is a duplicate.
    let err = store.save_url("HTTPS://EXAMPLE.COM/b?q=2").await.unwrap_err();
    match err {
        SaveUrlError::Duplicate { existing_id } => assert_eq!(existing_id, first),
        other => panic!("expected Duplicate, got {other:?}"),
    }

    // Still exactly one row.
    assert_eq!(store.list_urls().await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_urls_are_rejected_and_not_stored() {
    let store = open_memory().await.unwrap();

    let err = store.save_url("example.com").await.unwrap_err();
    assert!(matches!(err, SaveUrlError::Invalid(InvalidUrl::Syntax)));

    let long = format!("https://example.com/{}", "a".repeat(300));
    let err = store.save_url(&long).await.unwrap_err();
    assert!(matches!(err, SaveUrlError::Invalid(InvalidUrl::TooLong)));

    assert!(store.list_urls().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_urls_newest_first_with_latest_check() {
    let store = open_memory().await.unwrap();
    let first = store.save_url("https://a.example.com").await.unwrap();
    let second = store.save_url("https://b.example.com").await.unwrap();

    store.add_check(first, &outcome(200)).await.unwrap();
    store.add_check(first, &outcome(503)).await.unwrap();

    let urls = store.list_urls().await.unwrap();
    assert_eq!(urls.len(), 2);

    // Newest registration first.
    assert_eq!(urls[0].id, second);
    assert_eq!(urls[0].name, "https://b.example.com");
    assert_eq!(urls[0].last_status, None);
    assert_eq!(urls[0].last_checked_at, None);

    // The later of the two checks wins, even within the same second.
    assert_eq!(urls[1].id, first);
    assert_eq!(urls[1].last_status, Some(503));
    assert!(urls[1].last_checked_at.is_some());
}

#[tokio::test]
async fn add_check_persists_all_fields() {
    let store = open_memory().await.unwrap();
    let id = store.save_url("https://example.com").await.unwrap();

    let recorded = store.add_check(id, &outcome(200)).await.unwrap();
    assert_eq!(recorded.url_id, id);
    assert_eq!(recorded.status_code, 200);

    let checks = store.checks_for_url(id).await.unwrap();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].id, recorded.id);
    assert_eq!(checks[0].h1, "Welcome");
    assert_eq!(checks[0].title, "Front Page");
    assert_eq!(
        checks[0].description.as_deref(),
        Some("What this site is about.")
    );
    assert!(checks[0].created_at > 0);
}

#[tokio::test]
async fn check_fields_may_be_empty_or_absent() {
    let store = open_memory().await.unwrap();
    let id = store.save_url("https://example.com").await.unwrap();

    let bare = CheckOutcome {
        status_code: 204,
        h1: String::new(),
        title: String::new(),
        description: None,
    };
    store.add_check(id, &bare).await.unwrap();

    let checks = store.checks_for_url(id).await.unwrap();
    assert_eq!(checks[0].status_code, 204);
    assert_eq!(checks[0].h1, "");
    assert_eq!(checks[0].title, "");
    assert_eq!(checks[0].description, None);
}

#[tokio::test]
async fn checks_for_url_newest_first_and_isolated_per_url() {
    let store = open_memory().await.unwrap();
    let first = store.save_url("https://a.example.com").await.unwrap();
    let second = store.save_url("https://b.example.com").await.unwrap();

    let c1 = store.add_check(first, &outcome(200)).await.unwrap();
    let c2 = store.add_check(first, &outcome(301)).await.unwrap();
    store.add_check(second, &outcome(200)).await.unwrap();

    let checks = store.checks_for_url(first).await.unwrap();
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0].id, c2.id);
    assert_eq!(checks[0].status_code, 301);
    assert_eq!(checks[1].id, c1.id);

    assert_eq!(store.checks_for_url(second).await.unwrap().len(), 1);
    // Unknown url id has an empty history, not an error.
    assert!(store.checks_for_url(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn run_check_on_unknown_url_is_an_error() {
    let store = open_memory().await.unwrap();
    let checker = PageChecker::new().unwrap();

    let err = store.run_check(&checker, 42).await.unwrap_err();
    assert!(matches!(err, RunCheckError::UnknownUrl(42)));
}
