//! Asynchronous, fallible traversal.
use futures::future::{self, BoxFuture};
use futures::{FutureExt, TryFutureExt};
use tracing::trace;

use crate::These;

impl<A, B> These<A, B> {
    /// Like [`These::traverse`], with a boxed fallible future as the effect.
    ///
    /// An `OnlyA` never calls `f` and resolves immediately.
    pub fn traverse_async<'a, C, E>(
        self,
        f: impl FnOnce(B) -> BoxFuture<'a, Result<C, E>>,
    ) -> BoxFuture<'a, Result<These<A, C>, E>>
    where
        A: Send + 'a,
        C: Send + 'a,
        E: Send + 'a,
    {
        match self {
            These::OnlyA(a) => {
                trace!("traverse_async short-circuited on a lone A");
                future::ready(Ok(These::OnlyA(a))).boxed()
            }
            These::OnlyB(b) => {
                trace!("traverse_async over a lone B");
                f(b).map_ok(These::OnlyB).boxed()
            }
            These::Both(a, b) => {
                trace!("traverse_async over B, carrying A");
                f(b).map_ok(move |c| These::Both(a, c)).boxed()
            }
        }
    }
}
