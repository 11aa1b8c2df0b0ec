//! Typeclass-style traits over partially-applied type tokens.
//!
//! Rust has no higher-kinded types, so each trait is implemented for a token type
//! (`Option<PartiallyApplied>`, `These<A, PartiallyApplied>`, ...) whose generic
//! associated type names the structure being mapped over.
use std::convert::identity;
use std::marker::PhantomData;

/// "An uninhabited type used to define typeclass instances for partially-applied types."
///
/// For example: the [`Functor`] instance for `Option<X>` cannot be written over the
/// partially-applied type `Option`, so instead we write it over `Option<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// A structure-preserving map over a single type parameter.
///
/// Laws:
///   identity:    `fmap(x, |a| a) == x`
///   composition: `fmap(fmap(x, f), g) == fmap(x, |a| g(f(a)))`
///
/// ```rust
/// use lambda::{Functor, PartiallyApplied};
///
/// let mapped = <Option<PartiallyApplied> as Functor>::fmap(Some(1), |n| n + 10);
/// assert_eq!(mapped, Some(11));
/// ```
pub trait Functor {
    /// the type that is mapped over by `fmap`
    type Layer<X>;

    /// Apply some function `f` to each element inside a layer
    fn fmap<F, A, B>(input: Self::Layer<A>, f: F) -> Self::Layer<B>
    where
        F: FnMut(A) -> B;
}

/// Independent structure-preserving maps over two type parameters.
pub trait Bifunctor {
    type Layer<X, Y>;

    fn bimap<A, B, C, D, L, R>(input: Self::Layer<A, B>, l_fn: L, r_fn: R) -> Self::Layer<C, D>
    where
        L: FnOnce(A) -> C,
        R: FnOnce(B) -> D;

    /// `bimap` with the identity on the right
    fn bimap_l<A, B, C, F>(input: Self::Layer<A, B>, f: F) -> Self::Layer<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Self::bimap::<A, B, C, B, F, fn(B) -> B>(input, f, identity)
    }

    /// `bimap` with the identity on the left
    fn bimap_r<A, B, D, F>(input: Self::Layer<A, B>, f: F) -> Self::Layer<A, D>
    where
        F: FnOnce(B) -> D,
    {
        Self::bimap::<A, B, A, D, fn(A) -> A, F>(input, identity, f)
    }
}

/// Combination of independently-computed layers.
///
/// `pure` receives an existing layer as a shape witness. Most instances ignore it;
/// instances such as `These` use it to carry forward context that lives outside
/// the mapped slot.
pub trait Applicative: Functor {
    fn pure<X, C>(shape: Self::Layer<X>, value: C) -> Self::Layer<C>;

    fn zip<B, C, F>(input: Self::Layer<B>, app_fn: Self::Layer<F>) -> Self::Layer<C>
    where
        F: FnMut(B) -> C;

    /// Sequence `input` then `other`, keeping the value from `other`
    fn discard_l<B, C>(input: Self::Layer<B>, other: Self::Layer<C>) -> Self::Layer<C> {
        let keep_right = Self::fmap::<_, B, fn(C) -> C>(input, |_: B| identity as fn(C) -> C);
        Self::zip::<C, C, fn(C) -> C>(other, keep_right)
    }

    /// Sequence `input` then `other`, keeping the value from `input`
    fn discard_r<B, C>(input: Self::Layer<B>, other: Self::Layer<C>) -> Self::Layer<B> {
        let keep_left = Self::fmap::<_, C, fn(B) -> B>(other, |_: C| identity as fn(B) -> B);
        Self::zip::<B, B, fn(B) -> B>(input, keep_left)
    }
}

/// Sequencing of dependent computations.
pub trait Monad: Applicative {
    fn flat_map<B, C, F>(input: Self::Layer<B>, f: F) -> Self::Layer<C>
    where
        F: FnOnce(B) -> Self::Layer<C>;
}

/// Effectful traversal of the mapped slot.
///
/// There's no way to summon an `Applicative` for the effect `App` here, so the
/// caller supplies `pure`, used to lift a layer that holds nothing to traverse.
/// Reconstruction is lifted into the effect with `App::fmap`.
pub trait Traversable: Functor {
    fn traverse<App, B, C, F, P>(input: Self::Layer<B>, f: F, pure: P) -> App::Layer<Self::Layer<C>>
    where
        App: Functor,
        F: FnMut(B) -> App::Layer<C>,
        P: FnOnce(Self::Layer<C>) -> App::Layer<Self::Layer<C>>;
}

/// The composition of two functors, `F1<F2<X>>`
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: Functor, F2: Functor> Functor for Compose<F1, F2> {
    type Layer<X> = F1::Layer<F2::Layer<X>>;

    fn fmap<F, A, B>(input: Self::Layer<A>, mut f: F) -> Self::Layer<B>
    where
        F: FnMut(A) -> B,
    {
        #[allow(clippy::redundant_closure)] // `f` is borrowed once per outer element
        F1::fmap(input, move |inner| F2::fmap(inner, |x| f(x)))
    }
}

impl Functor for Option<PartiallyApplied> {
    type Layer<X> = Option<X>;

    fn fmap<F, A, B>(input: Self::Layer<A>, f: F) -> Self::Layer<B>
    where
        F: FnMut(A) -> B,
    {
        input.map(f)
    }
}

impl Applicative for Option<PartiallyApplied> {
    fn pure<X, C>(_shape: Self::Layer<X>, value: C) -> Self::Layer<C> {
        Some(value)
    }

    fn zip<B, C, F>(input: Self::Layer<B>, app_fn: Self::Layer<F>) -> Self::Layer<C>
    where
        F: FnMut(B) -> C,
    {
        // `Option::zip` is inherent, so name the trait explicitly
        <Self as Monad>::flat_map(app_fn, |f| input.map(f))
    }
}

impl Monad for Option<PartiallyApplied> {
    fn flat_map<B, C, F>(input: Self::Layer<B>, f: F) -> Self::Layer<C>
    where
        F: FnOnce(B) -> Self::Layer<C>,
    {
        input.and_then(f)
    }
}

impl Traversable for Option<PartiallyApplied> {
    fn traverse<App, B, C, F, P>(input: Self::Layer<B>, mut f: F, pure: P) -> App::Layer<Self::Layer<C>>
    where
        App: Functor,
        F: FnMut(B) -> App::Layer<C>,
        P: FnOnce(Self::Layer<C>) -> App::Layer<Self::Layer<C>>,
    {
        match input {
            Some(b) => App::fmap::<_, C, Option<C>>(f(b), Some),
            None => pure(None),
        }
    }
}

impl<E> Functor for Result<PartiallyApplied, E> {
    type Layer<X> = Result<X, E>;

    fn fmap<F, A, B>(input: Self::Layer<A>, f: F) -> Self::Layer<B>
    where
        F: FnMut(A) -> B,
    {
        input.map(f)
    }
}

impl<E> Applicative for Result<PartiallyApplied, E> {
    fn pure<X, C>(_shape: Self::Layer<X>, value: C) -> Self::Layer<C> {
        Ok(value)
    }

    fn zip<B, C, F>(input: Self::Layer<B>, app_fn: Self::Layer<F>) -> Self::Layer<C>
    where
        F: FnMut(B) -> C,
    {
        <Self as Monad>::flat_map(app_fn, |f| input.map(f))
    }
}

impl<E> Monad for Result<PartiallyApplied, E> {
    fn flat_map<B, C, F>(input: Self::Layer<B>, f: F) -> Self::Layer<C>
    where
        F: FnOnce(B) -> Self::Layer<C>,
    {
        input.and_then(f)
    }
}

impl Functor for Vec<PartiallyApplied> {
    type Layer<X> = Vec<X>;

    fn fmap<F, A, B>(input: Self::Layer<A>, f: F) -> Self::Layer<B>
    where
        F: FnMut(A) -> B,
    {
        input.into_iter().map(f).collect()
    }
}

impl<Fst> Functor for (Fst, PartiallyApplied) {
    type Layer<X> = (Fst, X);

    fn fmap<F, A, B>(input: Self::Layer<A>, mut f: F) -> Self::Layer<B>
    where
        F: FnMut(A) -> B,
    {
        (input.0, f(input.1))
    }
}

impl Bifunctor for (PartiallyApplied, PartiallyApplied) {
    type Layer<X, Y> = (X, Y);

    fn bimap<A, B, C, D, L, R>(input: Self::Layer<A, B>, l_fn: L, r_fn: R) -> Self::Layer<C, D>
    where
        L: FnOnce(A) -> C,
        R: FnOnce(B) -> D,
    {
        (l_fn(input.0), r_fn(input.1))
    }
}

// the error is the left parameter, so `bimap_r` is `Result::map`
impl Bifunctor for Result<PartiallyApplied, PartiallyApplied> {
    type Layer<X, Y> = Result<Y, X>;

    fn bimap<A, B, C, D, L, R>(input: Self::Layer<A, B>, l_fn: L, r_fn: R) -> Self::Layer<C, D>
    where
        L: FnOnce(A) -> C,
        R: FnOnce(B) -> D,
    {
        match input {
            Ok(b) => Ok(r_fn(b)),
            Err(a) => Err(l_fn(a)),
        }
    }
}
