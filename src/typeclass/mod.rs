//! Type class traits and type-constructor brands.
//!
//! This module provides the small type-level toolkit the Coyoneda and
//! Yoneda encodings are written against:
//!
//! - [`TypeConstructor`]: brand types emulating higher-kinded types
//! - [`Functor`]: evidence that a type constructor supports mapping
//! - [`NaturalTransformation`]: uniform conversions `F ~> G`
//! - [`Morphism`]: the bound for storable pure functions
//! - [`Identity`]: the identity functor
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) on zero-sized brands to
//! emulate them: `VecKind` stands for `Vec<_>`, and
//! `<VecKind as TypeConstructor>::WithType<i32>` is `Vec<i32>`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_coyoneda::typeclass::{Functor, NaturalTransformation, OptionKind, OptionToVec, VecKind};
//!
//! let mapped = OptionKind::fmap(Some(2), |n: i32| n * 10);
//! assert_eq!(mapped, Some(20));
//!
//! let as_vec = OptionToVec.transform(mapped);
//! assert_eq!(VecKind::fmap(as_vec, |n: i32| n + 1), vec![21]);
//! ```

mod functor;
mod higher;
mod identity;
mod morphism;
mod natural;

pub use functor::Functor;
pub use higher::{
    BTreeSetKind, BoxKind, OptionKind, ResultKind, TypeConstructor, VecDequeKind, VecKind,
};
pub use identity::{Identity, IdentityKind};
pub use morphism::Morphism;
pub(crate) use morphism::{ReferenceCounter, SharedMorphism, share};
pub use natural::{
    AndThen, BoxToIdentity, IdentityToOption, IdentityTransformation, NaturalTransformation,
    OptionToVec, ResultToOption, SetToVec, VecToOption, VecToVecDeque,
};
