#[cfg(test)]
use crate::these::{arb_context, arb_these, carrying_step};
#[cfg(test)]
use lambda::These;
#[cfg(test)]
use proptest::{prop_assert_eq, prop_assert_ne, prop_assume, proptest};
#[cfg(test)]
use std::collections::hash_map::DefaultHasher;
#[cfg(test)]
use std::hash::{Hash, Hasher};

#[cfg(test)]
fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
proptest! {
    #[test]
    fn functor_identity(t in arb_these()) {
        prop_assert_eq!(t.clone().fmap(|b| b), t);
    }

    #[test]
    fn functor_composition(t in arb_these()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| i64::from(x) - 7;
        prop_assert_eq!(t.clone().fmap(f).fmap(g), t.fmap(|x| g(f(x))));
    }

    #[test]
    fn bifunctor_identity(t in arb_these()) {
        prop_assert_eq!(t.clone().bimap(|a| a, |b| b), t);
    }

    #[test]
    fn bimap_is_bimap_l_then_bimap_r(t in arb_these()) {
        let l = |a: String| a.len();
        let r = |b: i32| b.wrapping_neg();
        prop_assert_eq!(t.clone().bimap(l, r), t.clone().bimap_l(l).bimap_r(r));
        prop_assert_eq!(t.clone().bimap(l, r), t.bimap_r(r).bimap_l(l));
    }

    #[test]
    fn fmap_is_bimap_r(t in arb_these()) {
        let r = |b: i32| b.to_string();
        prop_assert_eq!(t.clone().fmap(r), t.bimap_r(r));
    }

    #[test]
    fn flat_map_short_circuits_on_a(a in arb_context()) {
        let t: These<String, i32> = These::of_a(a.clone());
        prop_assert_eq!(t.flat_map(|b| These::both("unused".to_string(), b)), These::of_a(a));
    }

    #[test]
    fn flat_map_keeps_original_a(a in arb_context(), a2 in arb_context(), b: i32) {
        prop_assume!(a != a2);
        let t: These<String, i32> = These::both(a.clone(), b);
        let a2_inner = a2.clone();
        prop_assert_eq!(
            t.flat_map(move |x| These::both(a2_inner, x.wrapping_add(1))),
            These::both(a, b.wrapping_add(1))
        );
    }

    #[test]
    fn flat_map_right_identity_via_own_pure(t in arb_these()) {
        let shape = t.clone();
        prop_assert_eq!(t.clone().flat_map(move |b| shape.pure(b)), t);
    }

    #[test]
    fn flat_map_associative_for_a_carrying_steps(t in arb_these()) {
        let f = carrying_step("f");
        let g = carrying_step("g");
        let (f2, g2) = (f.clone(), g.clone());
        prop_assert_eq!(
            t.clone().flat_map(f).flat_map(g),
            t.flat_map(move |x| f2(x).flat_map(g2))
        );
    }

    #[test]
    fn pure_on_a_yields_both(a in arb_context(), c: u8) {
        prop_assert_eq!(These::<String, i32>::of_a(a.clone()).pure(c), These::both(a, c));
    }

    #[test]
    fn pure_on_b_yields_b(b: i32, c: u8) {
        prop_assert_eq!(These::<String, i32>::of_b(b).pure(c), These::of_b(c));
    }

    #[test]
    fn zip_with_lone_function_is_fmap(t in arb_these()) {
        let f = |b: i32| b.wrapping_mul(b);
        prop_assert_eq!(t.clone().zip(These::of_b(f)), t.fmap(f));
    }

    #[test]
    fn discard_r_with_lone_b_keeps_self(t in arb_these(), c: char) {
        prop_assert_eq!(t.clone().discard_r(These::of_b(c)), t);
    }

    #[test]
    fn sides_never_equal_across_variants(x: i32, y: i32) {
        prop_assert_ne!(These::<i32, i32>::of_a(x), These::of_b(x));
        prop_assert_ne!(These::both(x, y), These::of_a(x));
        prop_assert_ne!(These::both(x, y), These::of_b(y));
    }

    #[test]
    fn equal_values_hash_equally(t in arb_these()) {
        let copy = t.clone();
        prop_assert_eq!(&copy, &t);
        prop_assert_eq!(hash_of(&copy), hash_of(&t));
    }

    #[test]
    fn option_pair_round_trip(t in arb_these()) {
        prop_assert_eq!(These::try_from(t.clone().into_options()), Ok(t));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(These::<&str, i32>::both("err", 42).fmap(|x| x + 1), These::both("err", 43));
    assert_eq!(
        These::<&str, i32>::of_a("err").flat_map(|x| These::of_b(x + 1)),
        These::of_a("err")
    );
    assert_eq!(
        These::<&str, i32>::both("ctx", 1).flat_map(|x| These::both("ignored", x + 1)),
        These::both("ctx", 2)
    );
}
