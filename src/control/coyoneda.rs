//! Coyoneda: a free functor over any type constructor.
//!
//! `Coyoneda<F, A>` lets any type constructor `F` be mapped over as if it
//! were a [`Functor`], even when it is not one. Instead of applying a function
//! to the values inside `F` right away, the function is recorded next to the
//! wrapped value, and every later [`map`](Coyoneda::map) is fused into it by
//! composition. The container's own mapping runs exactly once, in
//! [`run`](Coyoneda::run), and that is the only place where evidence that
//! `F` is a functor is demanded.
//!
//! # Design
//!
//! ```text
//! Coyoneda<F, A, P> = { wrapped: F<P>, chain: P -> A }
//! ```
//!
//! `P` is the *pivot*: the element type actually stored in `F`. It is fixed
//! by [`lift`] (where it equals `A`, which is why it defaults to `A`) and never
//! changes afterwards. The pivot values and the fields are never exposed.
//!
//! The pending function is kept as a list of type-erased steps, not as nested
//! closures, so a chain of any length is run and dropped in constant stack
//! space.
//!
//! | Operation | Touches `wrapped` | Needs `F: Functor` |
//! |---|---|---|
//! | [`lift`], [`Coyoneda::new`], [`by`] | no | no |
//! | [`Coyoneda::map`] | no | no |
//! | [`Coyoneda::transform`] | moves it through `F ~> G` | no |
//! | [`Coyoneda::run`] | one `F::fmap` | yes |
//! | [`Coyoneda::to_yoneda`] | no | yes |
//!
//! # Laws
//!
//! For a lawful functor `F`:
//!
//! - **Identity**: `lift(fa).run() == fa`
//! - **Fusion**: `c.map(f).map(g).run() == c.map(|x| g(f(x))).run()`
//! - **Transform independence**: `c.transform(&n).map(f).run() == c.map(f).transform(&n).run()`
//!
//! # Examples
//!
//! ```rust
//! use lambars_coyoneda::control::lift;
//! use lambars_coyoneda::typeclass::VecKind;
//!
//! let result = lift::<VecKind, _>(vec![1, 2, 3])
//!     .map(|x: i32| x + 1)
//!     .map(|x: i32| x * 2)
//!     .run();
//!
//! assert_eq!(result, vec![4, 6, 8]);
//! ```
//!
//! ## Mapping a container that is not a functor
//!
//! ```rust
//! use lambars_coyoneda::control::lift;
//! use lambars_coyoneda::typeclass::{BTreeSetKind, SetToVec};
//! use std::collections::BTreeSet;
//!
//! let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
//!
//! // BTreeSetKind has no Functor instance, but it can still be mapped lazily.
//! let labels = lift::<BTreeSetKind, _>(set).map(|n: i32| format!("#{n}"));
//!
//! // Evidence is only needed once the wrapped set is moved into a functor.
//! assert_eq!(labels.fold_map(&SetToVec), vec!["#1", "#2", "#3"]);
//! ```

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::morphism_chain::MorphismChain;
use super::yoneda::Yoneda;
use crate::typeclass::{Functor, Morphism, NaturalTransformation, TypeConstructor};

/// A value of type `A` held as an `F<P>` plus a pending function `P -> A`.
///
/// See the [module documentation](self) for the encoding and its laws.
///
/// # Type Parameters
///
/// * `F` - The type constructor brand (it needs no [`Functor`] instance)
/// * `A` - The type of the values the container logically holds
/// * `P` - The pivot, the element type actually stored; defaults to `A`
///
/// The pivot is part of the type: `lift::<VecKind, _>(vec![1]).map(f)` is a
/// `Coyoneda<VecKind, B, i32>`, and values with different pivots are
/// different types even when `F` and `A` agree.
pub struct Coyoneda<F: TypeConstructor, A, P = A> {
    wrapped: F::WithType<P>,
    chain: MorphismChain<P, A>,
}

/// Lifts `wrapped` into a [`Coyoneda`] with the identity as pending function.
///
/// The brand usually has to be named, since it cannot be inferred from the
/// container type alone.
///
/// # Examples
///
/// ```rust
/// use lambars_coyoneda::control::lift;
/// use lambars_coyoneda::typeclass::OptionKind;
///
/// assert_eq!(lift::<OptionKind, _>(Some(7)).run(), Some(7));
/// ```
#[inline]
pub fn lift<F, A>(wrapped: F::WithType<A>) -> Coyoneda<F, A>
where
    F: TypeConstructor,
    A: 'static,
{
    Coyoneda::lift(wrapped)
}

impl<F, A> Coyoneda<F, A>
where
    F: TypeConstructor,
    A: 'static,
{
    /// Lifts `wrapped` with the identity as pending function.
    ///
    /// The pivot type is `A`. Never fails and never inspects `wrapped`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::Coyoneda;
    /// use lambars_coyoneda::typeclass::VecKind;
    ///
    /// let lifted = Coyoneda::<VecKind, _>::lift(vec!["a", "b"]);
    /// assert_eq!(lifted.run(), vec!["a", "b"]);
    /// ```
    #[inline]
    pub fn lift(wrapped: F::WithType<A>) -> Self {
        Self {
            wrapped,
            chain: MorphismChain::identity(),
        }
    }
}

impl<F, A, P> Coyoneda<F, A, P>
where
    F: TypeConstructor,
    A: 'static,
    P: 'static,
{
    /// Builds a `Coyoneda` from a wrapped value and the function to apply to
    /// it later.
    ///
    /// Equivalent to `lift(wrapped).map(function)`, with one composition less.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::Coyoneda;
    /// use lambars_coyoneda::typeclass::OptionKind;
    ///
    /// let pending = Coyoneda::<OptionKind, _, _>::new(Some(4), |n: i32| n * n);
    /// assert_eq!(pending.run(), Some(16));
    /// ```
    #[inline]
    pub fn new<Function>(wrapped: F::WithType<P>, function: Function) -> Self
    where
        Function: Morphism<P, A>,
    {
        Self {
            wrapped,
            chain: MorphismChain::new(function),
        }
    }

    /// Composes `function` after the pending function.
    ///
    /// The wrapped value is moved, not inspected, and `function` is not
    /// called. Each call appends one step in constant time; running or
    /// dropping the result never recurses, however long the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::lift;
    /// use lambars_coyoneda::typeclass::VecKind;
    ///
    /// let lengths = lift::<VecKind, _>(vec!["one", "three"])
    ///     .map(|word: &str| word.len());
    /// assert_eq!(lengths.run(), vec![3, 5]);
    /// ```
    #[inline]
    pub fn map<B, Function>(self, function: Function) -> Coyoneda<F, B, P>
    where
        B: 'static,
        Function: Morphism<A, B>,
    {
        Coyoneda {
            wrapped: self.wrapped,
            chain: self.chain.then(function),
        }
    }

    /// Moves the wrapped value through a natural transformation `F ~> G`.
    ///
    /// The pending function is carried over unchanged. Neither `F` nor `G`
    /// needs to be a functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::lift;
    /// use lambars_coyoneda::typeclass::{OptionKind, OptionToVec};
    ///
    /// let as_vec = lift::<OptionKind, _>(Some(10))
    ///     .map(|n: i32| n + 1)
    ///     .transform(&OptionToVec);
    /// assert_eq!(as_vec.run(), vec![11]);
    /// ```
    #[inline]
    pub fn transform<G, N>(self, natural: &N) -> Coyoneda<G, A, P>
    where
        G: TypeConstructor,
        N: NaturalTransformation<F, G>,
    {
        Coyoneda {
            wrapped: natural.transform::<P>(self.wrapped),
            chain: self.chain,
        }
    }

    /// Applies the pending function with `F`'s own mapping and returns the
    /// result.
    ///
    /// This is the only operation that calls [`Functor::fmap`], and it calls
    /// it exactly once regardless of how many `map`s came before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::lift;
    /// use lambars_coyoneda::typeclass::ResultKind;
    ///
    /// let ok = lift::<ResultKind<String>, _>(Ok(2)).map(|n: i32| n * 21);
    /// assert_eq!(ok.run(), Ok(42));
    /// ```
    #[inline]
    pub fn run(self) -> F::WithType<A>
    where
        F: Functor,
    {
        F::fmap::<P, A, _>(self.wrapped, self.chain.into_function())
    }

    /// Transforms into the functor `G` and runs there.
    ///
    /// Equivalent to `self.transform(natural).run()`. Only `G` needs a
    /// [`Functor`] instance, which is how a non-functor `F` is interpreted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::lift;
    /// use lambars_coyoneda::typeclass::{VecKind, VecToOption};
    ///
    /// let first = lift::<VecKind, _>(vec![5, 6]).map(|n: i32| n - 1);
    /// assert_eq!(first.fold_map(&VecToOption), Some(4));
    /// ```
    #[inline]
    pub fn fold_map<G, N>(self, natural: &N) -> G::WithType<A>
    where
        G: Functor,
        N: NaturalTransformation<F, G>,
    {
        self.transform(natural).run()
    }

    /// Re-expresses this value in the dual, continuation-style encoding.
    ///
    /// No work is performed; `F::fmap` runs when the [`Yoneda`] is applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::control::lift;
    /// use lambars_coyoneda::typeclass::VecKind;
    ///
    /// let yoneda = lift::<VecKind, _>(vec![1, 2]).map(|n: i32| n * 3).to_yoneda();
    /// assert_eq!(yoneda.apply(|n: i32| n.to_string()), vec!["3", "6"]);
    /// ```
    #[inline]
    pub fn to_yoneda(self) -> Yoneda<F, A, P>
    where
        F: Functor,
    {
        Yoneda::from_parts(self.wrapped, self.chain)
    }

    pub(super) const fn from_parts(
        wrapped: F::WithType<P>,
        chain: MorphismChain<P, A>,
    ) -> Self {
        Self { wrapped, chain }
    }
}

impl<F, A, P> Clone for Coyoneda<F, A, P>
where
    F: TypeConstructor,
    F::WithType<P>: Clone,
{
    /// Clones the wrapped value; the pending function is shared.
    fn clone(&self) -> Self {
        Self {
            wrapped: self.wrapped.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<F, A, P> Debug for Coyoneda<F, A, P>
where
    F: TypeConstructor,
    F::WithType<P>: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Coyoneda")
            .field("wrapped", &self.wrapped)
            .field("pending", &self.chain.len())
            .finish_non_exhaustive()
    }
}

impl<F, A, P> From<Yoneda<F, A, P>> for Coyoneda<F, A, P>
where
    F: Functor,
    A: 'static,
    P: 'static,
{
    fn from(yoneda: Yoneda<F, A, P>) -> Self {
        yoneda.to_coyoneda()
    }
}

// Without `arc` the pending function sits behind an `Rc`
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Coyoneda<crate::typeclass::VecKind, i32>: Send, Sync);

#[cfg(feature = "arc")]
mod arc_send_sync_verification_coyoneda {
    use super::Coyoneda;
    use crate::typeclass::{OptionKind, VecKind};

    static_assertions::assert_impl_all!(Coyoneda<VecKind, i32>: Send, Sync, Clone);
    static_assertions::assert_impl_all!(Coyoneda<OptionKind, String, i32>: Send, Sync);
}

// =============================================================================
// Builder
// =============================================================================

/// Builder fixing the brand `F`, so that construction names it only once.
///
/// Created by [`by`].
pub struct By<F>(PhantomData<fn() -> F>);

/// Starts building a [`Coyoneda`] over the brand `F`.
///
/// # Examples
///
/// ```rust
/// use lambars_coyoneda::control::by;
/// use lambars_coyoneda::typeclass::VecKind;
///
/// let doubled = by::<VecKind>().apply(vec![1, 2], |n: i32| n * 2);
/// assert_eq!(doubled.run(), vec![2, 4]);
///
/// // The wrapped value can also be resolved from `Default`.
/// let empty = by::<VecKind>().summon(|n: i32| n * 2);
/// assert!(empty.run().is_empty());
/// ```
#[inline]
pub const fn by<F: TypeConstructor>() -> By<F> {
    By::new()
}

impl<F: TypeConstructor> By<F> {
    /// Creates the builder.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Equivalent to `lift::<F, _>(wrapped).map(function)`.
    #[inline]
    pub fn apply<A, B, Function>(
        self,
        wrapped: F::WithType<A>,
        function: Function,
    ) -> Coyoneda<F, B, A>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        Coyoneda::new(wrapped, function)
    }

    /// Like [`apply`](Self::apply), with the wrapped value obtained from its
    /// [`Default`] instance.
    #[inline]
    pub fn summon<A, B, Function>(self, function: Function) -> Coyoneda<F, B, A>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
        F::WithType<A>: Default,
    {
        Coyoneda::new(Default::default(), function)
    }
}

impl<F: TypeConstructor> Default for By<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for By<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for By<F> {}

// =============================================================================
// Functor Instance
// =============================================================================

/// Brand for [`Coyoneda`] over `F` with pivot `P`.
///
/// Its [`Functor`] instance exists for every `F`, functor or not.
pub struct CoyonedaKind<F, P>(PhantomData<fn() -> (F, P)>);

impl<F: TypeConstructor, P> TypeConstructor for CoyonedaKind<F, P> {
    type WithType<T> = Coyoneda<F, T, P>;
}

impl<F: TypeConstructor, P: 'static> Functor for CoyonedaKind<F, P> {
    #[inline]
    fn fmap<A, B, Function>(fa: Coyoneda<F, A, P>, function: Function) -> Coyoneda<F, B, P>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        fa.map(function)
    }
}
