//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Vec<_>` directly. This module names each constructor by a zero-sized
//! **brand** type whose generic associated type `WithType<T>` applies the
//! constructor to `T`:
//!
//! | Brand | `WithType<T>` |
//! |---|---|
//! | [`OptionKind`] | `Option<T>` |
//! | [`VecKind`] | `Vec<T>` |
//! | [`VecDequeKind`] | `VecDeque<T>` |
//! | [`BoxKind`] | `Box<T>` |
//! | [`ResultKind<E>`] | `Result<T, E>` |
//! | [`BTreeSetKind`] | `BTreeSet<T>` |
//!
//! A brand says nothing about what the constructor can *do*. Capabilities such
//! as [`Functor`](super::Functor) are separate traits implemented on the brand,
//! so a brand without one (like [`BTreeSetKind`]) is still a perfectly good
//! `TypeConstructor`.
//!
//! # Example
//!
//! ```rust
//! use lambars_coyoneda::typeclass::{OptionKind, TypeConstructor};
//!
//! fn empty<F: TypeConstructor>() -> F::WithType<String>
//! where
//!     F::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty::<OptionKind>();
//! assert_eq!(none, None);
//! ```

use std::collections::{BTreeSet, VecDeque};
use std::marker::PhantomData;

/// A trait representing a type constructor of kind `* -> *`.
///
/// Implementors are brand types that are never instantiated; they only
/// carry the constructor at the type level.
///
/// # Laws
///
/// For any brand `F` and any type `T`, `F::WithType<T>` must be the same
/// constructor applied to `T`. A brand must not pick a different container
/// shape depending on `T`.
pub trait TypeConstructor {
    /// The constructor applied to `T`.
    type WithType<T>;
}

/// Brand for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

/// Brand for [`Vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecKind;

/// Brand for [`VecDeque`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecDequeKind;

/// Brand for [`Box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxKind;

/// Brand for [`Result`] with a fixed error type `E`.
///
/// Only the success type varies; the error type is part of the brand.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

/// Brand for [`BTreeSet`].
///
/// There is no [`Functor`](super::Functor) instance: mapping
/// into a set needs `Ord` on the output type, which a functor cannot demand.
/// Values of this brand can still be lifted into a
/// [`Coyoneda`](crate::control::Coyoneda) and mapped lazily, then run after a
/// natural transformation into a functor such as [`VecKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BTreeSetKind;

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl TypeConstructor for OptionKind {
    type WithType<T> = Option<T>;
}

impl TypeConstructor for VecKind {
    type WithType<T> = Vec<T>;
}

impl TypeConstructor for VecDequeKind {
    type WithType<T> = VecDeque<T>;
}

impl TypeConstructor for BoxKind {
    type WithType<T> = Box<T>;
}

impl<E> TypeConstructor for ResultKind<E> {
    type WithType<T> = Result<T, E>;
}

impl TypeConstructor for BTreeSetKind {
    type WithType<T> = BTreeSet<T>;
}
