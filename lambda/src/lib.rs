//! Functional-programming building blocks: the `These` coproduct, typeclass-style
//! traits over partially-applied type tokens, and infinite iterators.
pub mod adt;
mod error;
mod functor;
pub mod iteration;

#[cfg(feature = "experimental")]
pub mod experimental;

pub use adt::These;
pub use error::NeitherPresent;
pub use functor::{
    Applicative, Bifunctor, Compose, Functor, Monad, PartiallyApplied, Traversable,
};
