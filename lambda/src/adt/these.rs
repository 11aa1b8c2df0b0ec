use std::fmt::{self, Display};

use crate::error::NeitherPresent;
use crate::functor::{
    Applicative, Bifunctor, Functor, Monad, PartiallyApplied, Traversable,
};

/// Either an `A`, a `B`, or both at once.
///
/// `These` is right-biased: the `B` slot is the one mapped by [`These::fmap`] and bound
/// by [`These::flat_map`]. The `A` slot is treated as context. It short-circuits
/// binding when it stands alone, and when paired with a `B` it survives composition
/// unchanged.
///
/// ```rust
/// use lambda::These;
///
/// let t: These<&str, i32> = These::both("err", 42);
/// assert_eq!(t.fmap(|x| x + 1), These::both("err", 43));
///
/// let t: These<&str, i32> = These::of_a("err");
/// assert_eq!(t.flat_map(|x| These::of_b(x + 1)), These::of_a("err"));
///
/// let t: These<&str, i32> = These::both("ctx", 1);
/// assert_eq!(t.flat_map(|x| These::both("ignored", x + 1)), These::both("ctx", 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum These<A, B> {
    OnlyA(A),
    OnlyB(B),
    Both(A, B),
}

impl<A, B> These<A, B> {
    pub fn of_a(a: A) -> Self {
        These::OnlyA(a)
    }

    pub fn of_b(b: B) -> Self {
        These::OnlyB(b)
    }

    pub fn both(a: A, b: B) -> Self {
        These::Both(a, b)
    }

    /// Eliminate a `These`, running exactly one of the three branches.
    pub fn fold<R>(
        self,
        on_a: impl FnOnce(A) -> R,
        on_b: impl FnOnce(B) -> R,
        on_both: impl FnOnce(A, B) -> R,
    ) -> R {
        match self {
            These::OnlyA(a) => on_a(a),
            These::OnlyB(b) => on_b(b),
            These::Both(a, b) => on_both(a, b),
        }
    }

    /// Map both slots independently. `bimap(|a| a, |b| b)` is the identity.
    pub fn bimap<C, D>(self, l_fn: impl FnOnce(A) -> C, r_fn: impl FnOnce(B) -> D) -> These<C, D> {
        match self {
            These::OnlyA(a) => These::OnlyA(l_fn(a)),
            These::OnlyB(b) => These::OnlyB(r_fn(b)),
            These::Both(a, b) => These::Both(l_fn(a), r_fn(b)),
        }
    }

    pub fn bimap_l<Z>(self, f: impl FnOnce(A) -> Z) -> These<Z, B> {
        self.bimap(f, |b| b)
    }

    pub fn bimap_r<C>(self, f: impl FnOnce(B) -> C) -> These<A, C> {
        self.bimap(|a| a, f)
    }

    /// Map the `B` slot; an alias for [`These::bimap_r`].
    pub fn fmap<C>(self, f: impl FnOnce(B) -> C) -> These<A, C> {
        self.bimap_r(f)
    }

    /// Lift `c` into the `B` slot, keeping whatever `A` this value carries.
    ///
    /// NOTE: this is not the textbook applicative `pure`, which would ignore the
    /// receiver. An `OnlyA(a)` receiver yields `Both(a, c)`, not `OnlyB(c)`.
    pub fn pure<C>(self, c: C) -> These<A, C> {
        match self {
            These::OnlyA(a) => These::Both(a, c),
            These::OnlyB(_) => These::OnlyB(c),
            These::Both(a, _) => These::Both(a, c),
        }
    }

    /// Monadic bind over the `B` slot.
    ///
    /// `OnlyA` short-circuits. For `Both(a, b)` the result of `f(b)` has its `A`, if
    /// any, replaced by the original `a`; a bare `OnlyB` result is returned as is.
    pub fn flat_map<C>(self, f: impl FnOnce(B) -> These<A, C>) -> These<A, C> {
        match self {
            These::OnlyA(a) => These::OnlyA(a),
            These::OnlyB(b) => f(b),
            These::Both(a, b) => f(b).bimap_l(|_| a),
        }
    }

    /// Apply the function held by `app_fn` to the `B` slot of `self`.
    ///
    /// Defined as `app_fn.flat_map(|f| self.fmap(f))`, so any `A` carried alongside
    /// the function overrides the `A` of `self`.
    pub fn zip<C, F>(self, app_fn: These<A, F>) -> These<A, C>
    where
        F: FnOnce(B) -> C,
    {
        app_fn.flat_map(|f| self.fmap(f))
    }

    /// Sequence `self` then `other`, keeping the `B` of `other`.
    pub fn discard_l<C>(self, other: These<A, C>) -> These<A, C> {
        other.zip(self.fmap(|_| |c: C| c))
    }

    /// Sequence `self` then `other`, keeping the `B` of `self`.
    pub fn discard_r<C>(self, other: These<A, C>) -> These<A, B> {
        self.zip(other.fmap(|_| |b: B| b))
    }

    /// Effectfully map the `B` slot into the functor `App`.
    ///
    /// `OnlyA` never calls `f`; it is wrapped with `pure` instead.
    ///
    /// ```rust
    /// use lambda::{PartiallyApplied, These};
    ///
    /// let parsed = These::<&str, &str>::both("ctx", "7")
    ///     .traverse::<Option<PartiallyApplied>, i32, _, _>(|s| s.parse().ok(), Some);
    /// assert_eq!(parsed, Some(These::both("ctx", 7)));
    /// ```
    pub fn traverse<App, C, F, P>(self, f: F, pure: P) -> App::Layer<These<A, C>>
    where
        App: Functor,
        A: Clone,
        F: FnOnce(B) -> App::Layer<C>,
        P: FnOnce(These<A, C>) -> App::Layer<These<A, C>>,
    {
        match self {
            These::OnlyA(a) => pure(These::OnlyA(a)),
            These::OnlyB(b) => App::fmap::<_, C, These<A, C>>(f(b), These::OnlyB),
            These::Both(a, b) => App::fmap::<_, C, These<A, C>>(f(b), move |c| These::Both(a.clone(), c)),
        }
    }

    pub fn as_ref(&self) -> These<&A, &B> {
        match self {
            These::OnlyA(a) => These::OnlyA(a),
            These::OnlyB(b) => These::OnlyB(b),
            These::Both(a, b) => These::Both(a, b),
        }
    }

    pub fn swap(self) -> These<B, A> {
        match self {
            These::OnlyA(a) => These::OnlyB(a),
            These::OnlyB(b) => These::OnlyA(b),
            These::Both(a, b) => These::Both(b, a),
        }
    }

    pub fn is_only_a(&self) -> bool {
        matches!(self, These::OnlyA(_))
    }

    pub fn is_only_b(&self) -> bool {
        matches!(self, These::OnlyB(_))
    }

    pub fn is_both(&self) -> bool {
        matches!(self, These::Both(_, _))
    }

    /// The `A` value, whether alone or paired
    pub fn a(&self) -> Option<&A> {
        match self {
            These::OnlyA(a) | These::Both(a, _) => Some(a),
            These::OnlyB(_) => None,
        }
    }

    /// The `B` value, whether alone or paired
    pub fn b(&self) -> Option<&B> {
        match self {
            These::OnlyB(b) | These::Both(_, b) => Some(b),
            These::OnlyA(_) => None,
        }
    }

    /// Project into one optional slot per variant; exactly one slot is populated.
    pub fn project(self) -> (Option<A>, Option<B>, Option<(A, B)>) {
        self.fold(
            |a| (Some(a), None, None),
            |b| (None, Some(b), None),
            |a, b| (None, None, Some((a, b))),
        )
    }

    pub fn into_options(self) -> (Option<A>, Option<B>) {
        self.fold(|a| (Some(a), None), |b| (None, Some(b)), |a, b| (Some(a), Some(b)))
    }
}

impl<A, B> TryFrom<(Option<A>, Option<B>)> for These<A, B> {
    type Error = NeitherPresent;

    fn try_from(options: (Option<A>, Option<B>)) -> Result<Self, Self::Error> {
        match options {
            (Some(a), Some(b)) => Ok(These::Both(a, b)),
            (Some(a), None) => Ok(These::OnlyA(a)),
            (None, Some(b)) => Ok(These::OnlyB(b)),
            (None, None) => Err(NeitherPresent),
        }
    }
}

impl<A, B> From<(A, B)> for These<A, B> {
    fn from((a, b): (A, B)) -> Self {
        These::Both(a, b)
    }
}

impl<A: Display, B: Display> Display for These<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            These::OnlyA(a) => write!(f, "a({})", a),
            These::OnlyB(b) => write!(f, "b({})", b),
            These::Both(a, b) => write!(f, "both({}, {})", a, b),
        }
    }
}

// typeclass instances: all of these defer to the inherent methods above. Paths go
// through the trait because inherent methods of the same name take precedence.

impl<A> Functor for These<A, PartiallyApplied> {
    type Layer<X> = These<A, X>;

    fn fmap<F, B, C>(input: Self::Layer<B>, f: F) -> Self::Layer<C>
    where
        F: FnMut(B) -> C,
    {
        input.fmap(f)
    }
}

impl<A> Applicative for These<A, PartiallyApplied> {
    fn pure<X, C>(shape: Self::Layer<X>, value: C) -> Self::Layer<C> {
        shape.pure(value)
    }

    fn zip<B, C, F>(input: Self::Layer<B>, app_fn: Self::Layer<F>) -> Self::Layer<C>
    where
        F: FnMut(B) -> C,
    {
        input.zip(app_fn)
    }
}

impl<A> Monad for These<A, PartiallyApplied> {
    fn flat_map<B, C, F>(input: Self::Layer<B>, f: F) -> Self::Layer<C>
    where
        F: FnOnce(B) -> Self::Layer<C>,
    {
        input.flat_map(f)
    }
}

impl<A: Clone> Traversable for These<A, PartiallyApplied> {
    fn traverse<App, B, C, F, P>(input: Self::Layer<B>, f: F, pure: P) -> App::Layer<Self::Layer<C>>
    where
        App: Functor,
        F: FnMut(B) -> App::Layer<C>,
        P: FnOnce(Self::Layer<C>) -> App::Layer<Self::Layer<C>>,
    {
        input.traverse::<App, C, F, P>(f, pure)
    }
}

impl Bifunctor for These<PartiallyApplied, PartiallyApplied> {
    type Layer<X, Y> = These<X, Y>;

    fn bimap<A, B, C, D, L, R>(input: Self::Layer<A, B>, l_fn: L, r_fn: R) -> Self::Layer<C, D>
    where
        L: FnOnce(A) -> C,
        R: FnOnce(B) -> D,
    {
        input.bimap(l_fn, r_fn)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    type TheseF = These<&'static str, PartiallyApplied>;

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn variants_with_equal_payloads_differ() {
        assert_ne!(These::<i32, i32>::of_a(1), These::of_b(1));
        assert_ne!(These::both(1, 2), These::of_a(1));
        assert_ne!(These::both(1, 2), These::of_b(2));
        assert_ne!(hash_of(&These::<i32, i32>::of_a(1)), hash_of(&These::<i32, i32>::of_b(1)));
        assert_eq!(hash_of(&These::<i32, i32>::both(1, 2)), hash_of(&These::<i32, i32>::both(1, 2)));
    }

    #[test]
    fn fold_runs_one_branch() {
        let describe = |t: These<&str, i32>| {
            t.fold(|a| format!("a:{}", a), |b| format!("b:{}", b), |a, b| format!("{}+{}", a, b))
        };
        assert_eq!(describe(These::of_a("x")), "a:x");
        assert_eq!(describe(These::of_b(2)), "b:2");
        assert_eq!(describe(These::both("x", 2)), "x+2");
    }

    #[test]
    fn bimap_maps_present_sides() {
        let len_and_double = |t: These<&str, i32>| t.bimap(str::len, |n| n * 2);
        assert_eq!(len_and_double(These::of_a("abc")), These::of_a(3));
        assert_eq!(len_and_double(These::of_b(4)), These::of_b(8));
        assert_eq!(len_and_double(These::both("ab", 5)), These::both(2, 10));
    }

    #[test]
    fn pure_keeps_a() {
        assert_eq!(These::<&str, i32>::of_a("e").pure('c'), These::both("e", 'c'));
        assert_eq!(These::<&str, i32>::of_b(1).pure('c'), These::of_b('c'));
        assert_eq!(These::<&str, i32>::both("e", 1).pure('c'), These::both("e", 'c'));
    }

    #[test]
    fn flat_map_on_both() {
        let t: These<&str, i32> = These::both("ctx", 1);
        assert_eq!(t.flat_map(|x| These::both("ignored", x + 1)), These::both("ctx", 2));
        assert_eq!(t.flat_map(|_| These::<_, i32>::of_a("other")), These::of_a("ctx"));
        // a bare `B` result carries no `A` to replace
        assert_eq!(t.flat_map(|x| These::of_b(x * 10)), These::of_b(10));
    }

    #[test]
    fn zip_prefers_a_of_function() {
        let inc = |n: i32| n + 1;
        assert_eq!(These::<&str, i32>::both("x", 1).zip(These::both("f", inc)), These::both("f", 2));
        assert_eq!(These::<&str, i32>::both("x", 1).zip(These::of_b(inc)), These::both("x", 2));
        assert_eq!(These::<&str, i32>::of_b(1).zip(These::of_b(inc)), These::of_b(2));
        assert_eq!(These::<&str, i32>::of_a("x").zip(These::both("f", inc)), These::of_a("f"));
        assert_eq!(These::<&str, i32>::of_b(1).zip(These::<_, fn(i32) -> i32>::of_a("f")), These::of_a("f"));
    }

    #[test]
    fn discards() {
        let left: These<&str, i32> = These::both("x", 1);
        let right: These<&str, char> = These::both("y", 'r');
        assert_eq!(left.discard_l(right), These::both("x", 'r'));
        assert_eq!(left.discard_r(right), These::both("y", 1));
        assert_eq!(These::<&str, i32>::of_a("x").discard_l(right), These::of_a("x"));
        assert_eq!(These::<&str, i32>::of_b(1).discard_r(These::<&str, char>::of_b('r')), These::of_b(1));
    }

    #[test]
    fn traverse_into_option() {
        let parse = |s: &str| s.parse::<i32>().ok();
        let t: These<&str, &str> = These::of_a("only");
        assert_eq!(
            t.traverse::<Option<PartiallyApplied>, _, _, _>(parse, Some),
            Some(These::of_a("only"))
        );
        let t: These<&str, &str> = These::of_b("12");
        assert_eq!(t.traverse::<Option<PartiallyApplied>, _, _, _>(parse, Some), Some(These::of_b(12)));
        let t: These<&str, &str> = These::both("ctx", "nope");
        assert_eq!(t.traverse::<Option<PartiallyApplied>, _, _, _>(parse, Some), None);
    }

    #[test]
    fn traverse_reconstructs_each_effect_result() {
        use crate::functor::Compose;

        type OptVec = Compose<Option<PartiallyApplied>, Vec<PartiallyApplied>>;
        let t: These<String, i32> = These::both("ctx".to_string(), 2);
        let out = t.traverse::<OptVec, _, _, _>(|x| Some(vec![x, x + 1]), |t| Some(vec![t]));
        assert_eq!(
            out,
            Some(vec![These::both("ctx".to_string(), 2), These::both("ctx".to_string(), 3)])
        );
    }

    #[test]
    fn instances_defer_to_inherent_methods() {
        let t: These<&str, i32> = These::both("ctx", 1);
        assert_eq!(<TheseF as Functor>::fmap(t, |x| x + 1), These::both("ctx", 2));
        assert_eq!(<TheseF as Applicative>::pure(These::<_, ()>::of_a("e"), 5), These::both("e", 5));
        assert_eq!(
            <TheseF as Monad>::flat_map(t, |x| These::both("ignored", x * 3)),
            These::both("ctx", 3)
        );
        assert_eq!(
            <TheseF as Applicative>::discard_l(t, These::both("other", 'z')),
            These::both("ctx", 'z')
        );
        let traversed = <TheseF as Traversable>::traverse::<Vec<PartiallyApplied>, _, _, _, _>(
            t,
            |x| vec![x, -x],
            |t| vec![t],
        );
        assert_eq!(traversed, vec![These::both("ctx", 1), These::both("ctx", -1)]);
        assert_eq!(
            <These<PartiallyApplied, PartiallyApplied> as Bifunctor>::bimap_l(t, str::len),
            These::both(3, 1)
        );
    }

    #[test]
    fn projections() {
        assert_eq!(These::<i32, char>::of_a(1).project(), (Some(1), None, None));
        assert_eq!(These::<i32, char>::of_b('b').project(), (None, Some('b'), None));
        assert_eq!(These::both(1, 'b').project(), (None, None, Some((1, 'b'))));

        let t = These::both(1, 'b');
        assert_eq!((t.a(), t.b()), (Some(&1), Some(&'b')));
        assert_eq!(These::<i32, char>::of_b('b').a(), None);
        assert_eq!(t.swap(), These::both('b', 1));
        assert_eq!(t.as_ref(), These::both(&1, &'b'));
        assert!(t.is_both() && !t.is_only_a() && !t.is_only_b());
    }

    #[test]
    fn option_pair_conversions() {
        assert_eq!(These::try_from((Some(1), Some('b'))), Ok(These::both(1, 'b')));
        assert_eq!(These::try_from((Some(1), None::<char>)), Ok(These::of_a(1)));
        assert_eq!(These::try_from((None::<i32>, Some('b'))), Ok(These::of_b('b')));
        assert_eq!(These::<i32, char>::try_from((None, None)), Err(NeitherPresent));
        assert_eq!(These::<i32, char>::of_a(1).into_options(), (Some(1), None));
        assert_eq!(These::from((1, 'b')), These::both(1, 'b'));
    }

    #[test]
    fn display() {
        assert_eq!(These::<&str, i32>::of_a("err").to_string(), "a(err)");
        assert_eq!(These::<&str, i32>::of_b(3).to_string(), "b(3)");
        assert_eq!(These::both("err", 3).to_string(), "both(err, 3)");
    }
}
