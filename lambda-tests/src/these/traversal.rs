use futures::future::BoxFuture;
use futures::FutureExt;
use lambda::{PartiallyApplied, These};

#[cfg(test)]
type OptionF = Option<PartiallyApplied>;
type ResultF = Result<PartiallyApplied, String>;

/// Parse the `B` slot, failing on negative numbers
pub fn checked(n: i32) -> Result<u32, String> {
    u32::try_from(n).map_err(|_| format!("negative: {}", n))
}

pub fn checked_async<'a>(n: i32) -> BoxFuture<'a, Result<u32, String>> {
    futures::future::ready(checked(n)).boxed()
}

pub fn traverse_checked(t: These<String, i32>) -> Result<These<String, u32>, String> {
    t.traverse::<ResultF, _, _, _>(checked, Ok)
}

#[cfg(test)]
use crate::these::arb_these;
#[cfg(test)]
use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};

#[cfg(test)]
proptest! {
    #[test]
    fn traverse_with_some_is_some(t in arb_these()) {
        prop_assert_eq!(t.clone().traverse::<OptionF, _, _, _>(Some, Some), Some(t));
    }

    #[test]
    fn traverse_agrees_with_fmap_on_success(t in arb_these()) {
        prop_assume!(t.b().map_or(true, |b| *b >= 0));
        let expected = t.clone().fmap(|b| b as u32);
        prop_assert_eq!(traverse_checked(t), Ok(expected));
    }

    #[test]
    fn lone_a_never_calls_f(t in arb_these()) {
        let traversed = t.clone().traverse::<OptionF, i32, _, _>(|_| None, Some);
        if t.is_only_a() {
            prop_assert_eq!(traversed, Some(t));
        } else {
            prop_assert!(traversed.is_none());
        }
    }

    #[test]
    fn async_traversal_matches_sync(t in arb_these()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let async_result = rt.block_on(t.clone().traverse_async(checked_async));
        prop_assert_eq!(async_result, traverse_checked(t));
    }
}

#[test]
fn traverse_reports_failure() {
    assert_eq!(
        traverse_checked(These::both("ctx".to_string(), -4)),
        Err("negative: -4".to_string())
    );
    assert_eq!(
        traverse_checked(These::of_a("ctx".to_string())),
        Ok(These::of_a("ctx".to_string()))
    );
}

#[tokio::test]
async fn async_traversal_carries_a() {
    let t: These<String, i32> = These::both("ctx".to_string(), 9);
    assert_eq!(t.traverse_async(checked_async).await, Ok(These::both("ctx".to_string(), 9)));

    let lone: These<String, i32> = These::of_a("ctx".to_string());
    let out = lone
        .traverse_async(|_| -> BoxFuture<'static, Result<u32, String>> {
            panic!("lone A must not be traversed")
        })
        .await;
    assert_eq!(out, Ok(These::of_a("ctx".to_string())));
}
