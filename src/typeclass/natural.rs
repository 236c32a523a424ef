//! Natural transformations between type constructors.
//!
//! A natural transformation `F ~> G` converts `F<A>` into `G<A>` for every
//! element type `A`, uniformly: it may rearrange, drop or duplicate elements
//! but must not look at them. Here the element type is a method-level generic
//! parameter of [`NaturalTransformation::transform`], so an implementation has
//! no way to depend on which `A` it was given.
//!
//! # Laws
//!
//! ## Naturality
//!
//! When both sides are functors, transforming commutes with mapping:
//!
//! ```text
//! G::fmap(nt.transform(fa), f) == nt.transform(F::fmap(fa, f))
//! ```
//!
//! ## Identity and Associativity
//!
//! ```text
//! IdentityTransformation.and_then(nt) == nt == nt.and_then(IdentityTransformation)
//! a.and_then(b).and_then(c) == a.and_then(b.and_then(c))
//! ```
//!
//! These are caller obligations; they are verified by property tests for the
//! instances shipped here.
//!
//! # Examples
//!
//! ```rust
//! use lambars_coyoneda::typeclass::{NaturalTransformation, OptionToVec, VecToOption};
//!
//! assert_eq!(OptionToVec.transform(Some(3)), vec![3]);
//! assert_eq!(VecToOption.transform(vec![1, 2, 3]), Some(1));
//!
//! let round_trip = OptionToVec.and_then(VecToOption);
//! assert_eq!(round_trip.transform(Some("x")), Some("x"));
//! ```

use std::collections::{BTreeSet, VecDeque};
use std::marker::PhantomData;

use super::higher::{
    BTreeSetKind, BoxKind, OptionKind, ResultKind, TypeConstructor, VecDequeKind, VecKind,
};
use super::identity::{Identity, IdentityKind};

/// A structure-preserving conversion `F ~> G`, uniform in the element type.
pub trait NaturalTransformation<F: TypeConstructor, G: TypeConstructor> {
    /// Converts `F<A>` into `G<A>`.
    fn transform<A>(&self, fa: F::WithType<A>) -> G::WithType<A>;

    /// Composes this transformation with `next`, yielding `F ~> H` when
    /// `next` is `G ~> H`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::typeclass::{NaturalTransformation, OptionToVec, VecToVecDeque};
    /// use std::collections::VecDeque;
    ///
    /// let composed = OptionToVec.and_then(VecToVecDeque);
    /// assert_eq!(composed.transform(Some(1)), VecDeque::from(vec![1]));
    /// ```
    #[inline]
    fn and_then<N>(self, next: N) -> AndThen<Self, N, G>
    where
        Self: Sized,
    {
        AndThen {
            first: self,
            second: next,
            _middle: PhantomData,
        }
    }
}

/// Vertical composition of two natural transformations through the
/// intermediate constructor `G`. Built by [`NaturalTransformation::and_then`].
pub struct AndThen<N, M, G> {
    first: N,
    second: M,
    _middle: PhantomData<fn() -> G>,
}

impl<F, G, H, N, M> NaturalTransformation<F, H> for AndThen<N, M, G>
where
    F: TypeConstructor,
    G: TypeConstructor,
    H: TypeConstructor,
    N: NaturalTransformation<F, G>,
    M: NaturalTransformation<G, H>,
{
    #[inline]
    fn transform<A>(&self, fa: F::WithType<A>) -> H::WithType<A> {
        self.second.transform::<A>(self.first.transform::<A>(fa))
    }
}

impl<N: Clone, M: Clone, G> Clone for AndThen<N, M, G> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _middle: PhantomData,
        }
    }
}

// =============================================================================
// Instances
// =============================================================================

/// `F ~> F`, returning its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityTransformation;

impl<F: TypeConstructor> NaturalTransformation<F, F> for IdentityTransformation {
    #[inline]
    fn transform<A>(&self, fa: F::WithType<A>) -> F::WithType<A> {
        fa
    }
}

/// `Option ~> Vec`: `None` becomes `[]`, `Some(a)` becomes `[a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionToVec;

impl NaturalTransformation<OptionKind, VecKind> for OptionToVec {
    #[inline]
    fn transform<A>(&self, fa: Option<A>) -> Vec<A> {
        fa.into_iter().collect()
    }
}

/// `Vec ~> Option`, keeping the first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecToOption;

impl NaturalTransformation<VecKind, OptionKind> for VecToOption {
    #[inline]
    fn transform<A>(&self, fa: Vec<A>) -> Option<A> {
        fa.into_iter().next()
    }
}

/// `Vec ~> VecDeque`, preserving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecToVecDeque;

impl NaturalTransformation<VecKind, VecDequeKind> for VecToVecDeque {
    #[inline]
    fn transform<A>(&self, fa: Vec<A>) -> VecDeque<A> {
        VecDeque::from(fa)
    }
}

/// `Box ~> Identity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxToIdentity;

impl NaturalTransformation<BoxKind, IdentityKind> for BoxToIdentity {
    #[inline]
    fn transform<A>(&self, fa: Box<A>) -> Identity<A> {
        Identity(*fa)
    }
}

/// `Identity ~> Option`, always `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityToOption;

impl NaturalTransformation<IdentityKind, OptionKind> for IdentityToOption {
    #[inline]
    fn transform<A>(&self, fa: Identity<A>) -> Option<A> {
        Some(fa.into_inner())
    }
}

/// `Result<_, E> ~> Option`, dropping the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResultToOption;

impl<E> NaturalTransformation<ResultKind<E>, OptionKind> for ResultToOption {
    #[inline]
    fn transform<A>(&self, fa: Result<A, E>) -> Option<A> {
        fa.ok()
    }
}

/// `BTreeSet ~> Vec`, in ascending order.
///
/// This is the usual way out of [`BTreeSetKind`], which has no
/// [`Functor`](super::Functor) instance of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetToVec;

impl NaturalTransformation<BTreeSetKind, VecKind> for SetToVec {
    #[inline]
    fn transform<A>(&self, fa: BTreeSet<A>) -> Vec<A> {
        fa.into_iter().collect()
    }
}
