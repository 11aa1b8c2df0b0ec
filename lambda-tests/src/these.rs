pub mod laws;
pub mod serialization;
pub mod traversal;

use lambda::These;
use proptest::prelude::*;

/// Short lowercase strings for the `A` slot, so failures stay readable
pub fn arb_context() -> impl Strategy<Value = String> {
    "[a-z]{0,8}"
}

pub fn arb_these() -> impl Strategy<Value = These<String, i32>> {
    prop_oneof![
        arb_context().prop_map(These::<String, i32>::of_a),
        any::<i32>().prop_map(These::<String, i32>::of_b),
        (arb_context(), any::<i32>()).prop_map(|(a, b)| These::both(a, b)),
    ]
}

/// A continuation for `flat_map` that never returns a bare `OnlyB`: it always
/// carries some `A` of its own, which `flat_map` then overrides.
pub fn carrying_step(tag: &'static str) -> impl Fn(i32) -> These<String, i32> + Clone {
    move |n| {
        if n % 3 == 0 {
            These::of_a(format!("{}-stop", tag))
        } else {
            These::both(tag.to_string(), n.wrapping_add(1))
        }
    }
}
