#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_is_after_2020_and_monotone_enough() {
    let first = now_ms();
    let second = now_ms();
    assert!(first > 1_577_836_800_000);
    assert!(second >= first);
}
