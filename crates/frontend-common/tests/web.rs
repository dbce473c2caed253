//! Browser tests for the `localStorage` session store.
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend-common`.

#![cfg(target_arch = "wasm32")]

use gloo::storage::{LocalStorage, Storage};
use meowtrade_frontend_common::shell::Verdict;
use meowtrade_frontend_common::{BrowserSessionStore, SessionRecord, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn store(key: &str) -> BrowserSessionStore {
    let store = BrowserSessionStore::new(key);
    LocalStorage::delete(key);
    store
}

#[wasm_bindgen_test]
fn missing_record_redirects() {
    let store = store("test_missing_record");
    assert_eq!(store.get_session(), None);
    assert_eq!(Verdict::from_session(store.get_session()), Verdict::Redirect);
}

#[wasm_bindgen_test]
fn malformed_record_redirects() {
    let store = store("test_malformed_record");
    LocalStorage::raw()
        .set_item(store.key(), "{not json")
        .unwrap();

    assert!(store.load_session().is_err());
    assert_eq!(Verdict::from_session(store.get_session()), Verdict::Redirect);
}

#[wasm_bindgen_test]
fn unauthenticated_record_redirects() {
    let store = store("test_unauthenticated_record");
    LocalStorage::raw()
        .set_item(store.key(), r#"{"authenticated":false,"name":"Alice"}"#)
        .unwrap();

    assert_eq!(Verdict::from_session(store.get_session()), Verdict::Redirect);
}

#[wasm_bindgen_test]
fn authenticated_record_is_authorized() {
    let store = store("test_authenticated_record");
    LocalStorage::raw()
        .set_item(store.key(), r#"{"authenticated":true,"name":"Alice"}"#)
        .unwrap();

    match Verdict::from_session(store.get_session()) {
        Verdict::Authorized(record) => assert_eq!(record.display_name(), "Alice"),
        Verdict::Redirect => panic!("expected an authorized verdict"),
    }
}

#[wasm_bindgen_test]
fn save_then_clear_round_trip() {
    let store = store("test_save_clear");
    store
        .save_session(&SessionRecord::authenticated("Alice"))
        .unwrap();
    assert!(store.get_session().is_some());

    store.clear_session();
    assert_eq!(store.get_session(), None);
    assert!(LocalStorage::raw().get_item(store.key()).unwrap().is_none());
}
