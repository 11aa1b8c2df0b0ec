//! Iterators that never run out.
//!
//! An [`InfiniteIterator`] has no way to signal exhaustion: `next` hands back an item
//! directly rather than an `Option`. Use [`InfiniteIterator::endless`] to plug one into
//! the standard [`Iterator`] machinery.
use std::iter::FusedIterator;

/// A producer of an unbounded sequence of items.
pub trait InfiniteIterator {
    type Item;

    /// Produce the next item. Always succeeds.
    fn next(&mut self) -> Self::Item;

    /// View this as a std [`Iterator`] that always yields `Some`
    ///
    /// ```rust
    /// use lambda::iteration::{repeat, InfiniteIterator};
    ///
    /// let fives: Vec<u8> = repeat(5).endless().take(3).collect();
    /// assert_eq!(fives, vec![5, 5, 5]);
    /// ```
    fn endless(self) -> Endless<Self>
    where
        Self: Sized,
    {
        Endless(self)
    }
}

/// Adapter from [`InfiniteIterator`] to [`Iterator`], see [`InfiniteIterator::endless`]
#[derive(Clone, Debug)]
pub struct Endless<I>(I);

impl<I: InfiniteIterator> Iterator for Endless<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I: InfiniteIterator> FusedIterator for Endless<I> {}

/// Yields the same value forever, see [`repeat`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repetitious<A> {
    value: A,
}

/// An infinite iterator whose every element is `value`
pub fn repeat<A>(value: A) -> Repetitious<A> {
    Repetitious { value }
}

impl<A: Clone> InfiniteIterator for Repetitious<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> A {
        self.value.clone()
    }
}

/// Repeated application of a function to a seed, see [`iterate`]
#[derive(Clone)]
pub struct Iterated<A, F> {
    current: A,
    step: F,
}

/// An infinite iterator yielding `seed`, `f(&seed)`, `f(&f(&seed))`, ...
pub fn iterate<A, F>(seed: A, step: F) -> Iterated<A, F>
where
    F: FnMut(&A) -> A,
{
    Iterated { current: seed, step }
}

impl<A, F> InfiniteIterator for Iterated<A, F>
where
    F: FnMut(&A) -> A,
{
    type Item = A;

    fn next(&mut self) -> A {
        let following = (self.step)(&self.current);
        std::mem::replace(&mut self.current, following)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_never_terminates() {
        let mut fives = repeat(5);
        for _ in 0..10_000 {
            assert_eq!(fives.next(), 5);
        }
    }

    #[test]
    fn repeat_accepts_absent_values() {
        let mut nothing = repeat(None::<String>);
        assert_eq!(nothing.next(), None);
        assert_eq!(nothing.next(), None);
    }

    #[test]
    fn endless_reports_unbounded_size() {
        let mut endless = repeat("x").endless();
        assert_eq!(endless.size_hint(), (usize::MAX, None));
        assert!(endless.by_ref().take(10_000).all(|x| x == "x"));
        assert_eq!(endless.next(), Some("x"));
    }

    #[test]
    fn iterate_applies_step() {
        let powers: Vec<u64> = iterate(1u64, |n| n * 2).endless().take(5).collect();
        assert_eq!(powers, vec![1, 2, 4, 8, 16]);

        let mut words = iterate(String::from("a"), |s| format!("{}a", s));
        assert_eq!(words.next(), "a");
        assert_eq!(words.next(), "aa");
        assert_eq!(words.next(), "aaa");
    }
}
