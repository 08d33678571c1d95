#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn availability_outside_browser_is_unavailable() {
    let err = availability().unwrap_err();
    assert_eq!(err.reason, "no browser environment");
}
