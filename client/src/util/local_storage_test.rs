#![cfg(not(feature = "hydrate"))]

use super::*;
use movies::{STORAGE_KEY, WatchlistStore};

#[test]
fn reads_as_empty_outside_the_browser() {
    assert!(matches!(LocalStorage.get(STORAGE_KEY), Ok(None)));
}

#[test]
fn writes_are_accepted_outside_the_browser() {
    let mut store = LocalStorage;
    assert!(store.set(STORAGE_KEY, "[]").is_ok());
    assert!(matches!(store.get(STORAGE_KEY), Ok(None)));
}

#[test]
fn opening_outside_the_browser_yields_defaults() {
    let opened = WatchlistStore::open(LocalStorage).expect("open");
    assert_eq!(opened.watchlist().len(), 2);
}
