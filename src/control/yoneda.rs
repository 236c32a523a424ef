//! Yoneda: the continuation-style dual of [`Coyoneda`].
//!
//! A `Yoneda<F, A>` is a polymorphic function: for every target type `B`
//! and function `g: A -> B` it produces an `F<B>`. It represents the same
//! deferred computation as a `Coyoneda`, but unlike `Coyoneda` it can only
//! be built when `F` is a [`Functor`], because applying it is always a single
//! `F::fmap`.
//!
//! ```text
//! Yoneda<F, A>  ~  forall B. (A -> B) -> F<B>
//! ```
//!
//! Rust has no rank-2 closures, so the polymorphic function is the generic
//! method [`Yoneda::apply`]. Internally it keeps the wrapped `F<P>` and the
//! pending `P -> A`, like `Coyoneda`.
//!
//! # Laws
//!
//! - **Agreement**: `c.to_yoneda().run() == c.run()` for every `Coyoneda` `c`
//! - **Apply**: `y.apply(g) == F::fmap(y.run(), g)`
//!
//! # Examples
//!
//! ```rust
//! use lambars_coyoneda::control::Yoneda;
//! use lambars_coyoneda::typeclass::VecKind;
//!
//! let yoneda = Yoneda::<VecKind, _>::lift(vec![1, 2, 3]).map(|n: i32| n + 1);
//!
//! let labels = yoneda.clone().apply(|n: i32| format!("<{n}>"));
//! assert_eq!(labels, vec!["<2>", "<3>", "<4>"]);
//! assert_eq!(yoneda.run(), vec![2, 3, 4]);
//! ```

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::coyoneda::Coyoneda;
use super::morphism_chain::MorphismChain;
use crate::compose::identity;
use crate::typeclass::{Functor, Morphism, NaturalTransformation, TypeConstructor};

/// The dual encoding of a deferred mapping over the functor `F`.
///
/// # Type Parameters
///
/// * `F` - The functor brand
/// * `A` - The type `apply` feeds to its function
/// * `P` - The pivot stored in `F`; defaults to `A`
///
/// As with [`Coyoneda`], values with different pivots are different types.
pub struct Yoneda<F: TypeConstructor, A, P = A> {
    wrapped: F::WithType<P>,
    chain: MorphismChain<P, A>,
}

impl<F, A> Yoneda<F, A>
where
    F: Functor,
    A: 'static,
{
    /// Lifts `fa`; applying the result to `g` is `F::fmap(fa, g)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::Yoneda;
    /// use lambars_coyoneda::typeclass::OptionKind;
    ///
    /// let yoneda = Yoneda::<OptionKind, _>::lift(Some(4));
    /// assert_eq!(yoneda.apply(|n: i32| n * 2), Some(8));
    /// ```
    #[inline]
    pub fn lift(fa: F::WithType<A>) -> Self {
        Self {
            wrapped: fa,
            chain: MorphismChain::identity(),
        }
    }
}

impl<F, A, P> Yoneda<F, A, P>
where
    F: Functor,
    A: 'static,
    P: 'static,
{
    pub(super) const fn from_parts(
        wrapped: F::WithType<P>,
        chain: MorphismChain<P, A>,
    ) -> Self {
        Self { wrapped, chain }
    }

    /// Maps `function` after the pending function, in a single `F::fmap`.
    #[inline]
    pub fn apply<B, Function>(self, function: Function) -> F::WithType<B>
    where
        B: 'static,
        Function: Morphism<A, B>,
    {
        F::fmap::<P, B, _>(self.wrapped, self.chain.then(function).into_function())
    }

    /// Lowers back to `F<A>`; the same as `apply(identity)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::Yoneda;
    /// use lambars_coyoneda::typeclass::VecKind;
    ///
    /// let yoneda = Yoneda::<VecKind, _>::lift(vec!['a', 'b']);
    /// assert_eq!(yoneda.run(), vec!['a', 'b']);
    /// ```
    #[inline]
    pub fn run(self) -> F::WithType<A> {
        self.apply(identity::<A>)
    }

    /// Composes `function` after the pending function without calling it.
    #[inline]
    pub fn map<B, Function>(self, function: Function) -> Yoneda<F, B, P>
    where
        B: 'static,
        Function: Morphism<A, B>,
    {
        Yoneda {
            wrapped: self.wrapped,
            chain: self.chain.then(function),
        }
    }

    /// Moves the wrapped value into the functor `G` through `F ~> G`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::Yoneda;
    /// use lambars_coyoneda::typeclass::{VecKind, VecToOption};
    ///
    /// let head = Yoneda::<VecKind, _>::lift(vec![3, 4])
    ///     .map(|n: i32| n * 100)
    ///     .transform(&VecToOption);
    /// assert_eq!(head.run(), Some(300));
    /// ```
    #[inline]
    pub fn transform<G, N>(self, natural: &N) -> Yoneda<G, A, P>
    where
        G: Functor,
        N: NaturalTransformation<F, G>,
    {
        Yoneda {
            wrapped: natural.transform::<P>(self.wrapped),
            chain: self.chain,
        }
    }

    /// Converts to the [`Coyoneda`] encoding of the same computation.
    #[inline]
    pub fn to_coyoneda(self) -> Coyoneda<F, A, P> {
        Coyoneda::from_parts(self.wrapped, self.chain)
    }
}

impl<F, A, P> Clone for Yoneda<F, A, P>
where
    F: TypeConstructor,
    F::WithType<P>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            wrapped: self.wrapped.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<F, A, P> Debug for Yoneda<F, A, P>
where
    F: TypeConstructor,
    F::WithType<P>: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Yoneda")
            .field("wrapped", &self.wrapped)
            .field("pending", &self.chain.len())
            .finish_non_exhaustive()
    }
}

impl<F, A, P> From<Coyoneda<F, A, P>> for Yoneda<F, A, P>
where
    F: Functor,
    A: 'static,
    P: 'static,
{
    fn from(coyoneda: Coyoneda<F, A, P>) -> Self {
        coyoneda.to_yoneda()
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Yoneda<crate::typeclass::VecKind, i32>: Send, Sync);

#[cfg(feature = "arc")]
mod arc_send_sync_verification_yoneda {
    use super::Yoneda;
    use crate::typeclass::VecKind;

    static_assertions::assert_impl_all!(Yoneda<VecKind, i32>: Send, Sync, Clone);
}

/// Brand for [`Yoneda`] over the functor `F` with pivot `P`.
pub struct YonedaKind<F, P>(PhantomData<fn() -> (F, P)>);

impl<F: TypeConstructor, P> TypeConstructor for YonedaKind<F, P> {
    type WithType<T> = Yoneda<F, T, P>;
}

impl<F: Functor, P: 'static> Functor for YonedaKind<F, P> {
    #[inline]
    fn fmap<A, B, Function>(fa: Yoneda<F, A, P>, function: Function) -> Yoneda<F, B, P>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        fa.map(function)
    }
}
