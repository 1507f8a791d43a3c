// Rust guideline compliant 2026-10-17

//! Unit tests for the status catalog.

use replykit_core::catalog::{self, Category};
use replykit_core::Error;

#[test]
fn test_catalog_is_sorted_and_unique() {
    let codes: Vec<u16> = catalog::all().iter().map(|info| info.code).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

#[test]
fn test_catalog_size() {
    assert_eq!(catalog::all().len(), 62);
}

#[test]
fn test_lookup_known_code() {
    let info = catalog::lookup(418).expect("418 should be catalogued");
    assert_eq!(info.reason, "I'm a teapot");
    assert_eq!(info.category, Category::ClientError);
    assert!(!info.vendor);
    assert_eq!(info.helper, "im_a_teapot");
}

#[test]
fn test_lookup_unknown_code() {
    assert!(catalog::lookup(402).is_none());
    assert!(catalog::reason_phrase(599).is_none());
}

#[test]
fn test_require_unknown_code() {
    let err = catalog::require(425).unwrap_err();
    assert!(matches!(err, Error::UnknownStatus(425)));
    assert!(catalog::require(200).is_ok());
}

#[test]
fn test_vendor_codes() {
    let codes: Vec<u16> = catalog::vendor_codes().map(|info| info.code).collect();
    assert_eq!(codes, vec![460, 463, 464, 561]);
}

#[test]
fn test_category_matches_range() {
    for info in catalog::all() {
        assert_eq!(Category::of(info.code), Some(info.category), "code {}", info.code);
    }
}

#[test]
fn test_category_boundaries() {
    assert_eq!(Category::of(99), None);
    assert_eq!(Category::of(100), Some(Category::Informational));
    assert_eq!(Category::of(299), Some(Category::Success));
    assert_eq!(Category::of(300), Some(Category::Redirection));
    assert_eq!(Category::of(499), Some(Category::ClientError));
    assert_eq!(Category::of(599), Some(Category::ServerError));
    assert_eq!(Category::of(600), None);
}
