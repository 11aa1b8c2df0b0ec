#[cfg(test)]
use crate::these::arb_these;
#[cfg(test)]
use lambda::These;
#[cfg(test)]
use proptest::{prop_assert_eq, proptest};

#[test]
fn externally_tagged_by_variant() {
    let both: These<&str, i32> = These::both("ctx", 1);
    assert_eq!(serde_json::to_string(&both).unwrap(), r#"{"Both":["ctx",1]}"#);
    assert_eq!(
        serde_json::to_string(&These::<&str, i32>::of_a("err")).unwrap(),
        r#"{"OnlyA":"err"}"#
    );
    assert_eq!(serde_json::to_string(&These::<&str, i32>::of_b(7)).unwrap(), r#"{"OnlyB":7}"#);
}

#[test]
fn rejects_unknown_variant() {
    assert!(serde_json::from_str::<These<String, i32>>(r#"{"Neither":null}"#).is_err());
}

#[cfg(test)]
proptest! {
    #[test]
    fn json_preserves_variant(t in arb_these()) {
        let json = serde_json::to_string(&t).unwrap();
        let back: These<String, i32> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, t);
    }
}
