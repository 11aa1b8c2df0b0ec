#[cfg(test)]
use lambda::iteration::{iterate, repeat, InfiniteIterator};
#[cfg(test)]
use proptest::{prop_assert, prop_assert_eq, proptest};

#[cfg(test)]
proptest! {
    #[test]
    fn repeat_yields_its_value(value: i64, pulls in 1usize..2_000) {
        let mut repeated = repeat(value);
        for _ in 0..pulls {
            prop_assert_eq!(repeated.next(), value);
        }
    }

    #[test]
    fn endless_repeat_is_never_exhausted(value: String) {
        let mut endless = repeat(value.clone()).endless();
        prop_assert!(endless.by_ref().take(100).all(|v| v == value));
        prop_assert_eq!(endless.next(), Some(value));
    }

    #[test]
    fn iterate_matches_successors(seed: u16, len in 0usize..64) {
        let step = |n: &u32| n.wrapping_mul(31).wrapping_add(7);
        let ours: Vec<u32> = iterate(u32::from(seed), step).endless().take(len).collect();
        let std_version: Vec<u32> =
            std::iter::successors(Some(u32::from(seed)), |n| Some(step(n))).take(len).collect();
        prop_assert_eq!(ours, std_version);
    }
}

#[test]
fn repeat_five_ten_thousand_times() {
    let mut fives = repeat(5);
    assert!((0..10_000).all(|_| fives.next() == 5));
}
