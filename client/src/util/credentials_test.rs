use super::*;
use crate::nav::guard::{TOKEN_KEY, TOKEN_TYPE_KEY};

#[test]
fn storage_keys_are_distinct_and_namespaced() {
    assert_ne!(TOKEN_KEY, TOKEN_TYPE_KEY);
    assert!(TOKEN_KEY.starts_with("marlowe_"));
    assert!(TOKEN_TYPE_KEY.starts_with("marlowe_"));
}

#[test]
fn non_browser_build_reports_no_credential() {
    // Without a browser environment the store degrades to empty reads and
    // ignored writes rather than panicking.
    let store = BrowserCredentials;
    store.set(TOKEN_KEY, "abc123");
    assert_eq!(store.get(TOKEN_KEY), None);
    store.remove(TOKEN_KEY);
}
