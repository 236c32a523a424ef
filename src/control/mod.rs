//! Deferred mapping over type constructors.
//!
//! This module provides the two encodings of a pending `map`:
//!
//! - [`Coyoneda`]: a wrapped `F<P>` plus a fused function `P -> A`; works for
//!   any type constructor and asks for [`Functor`](crate::typeclass::Functor)
//!   evidence only when run
//! - [`Yoneda`]: the continuation-style dual, a polymorphic
//!   `(A -> B) -> F<B>`; requires a functor up front
//!
//! Both are pure values. Nothing in this module performs I/O or mutates
//! shared state, so a value can be cloned and handed to independent callers
//! (across threads with the `arc` feature).
//!
//! # Examples
//!
//! ## Fusing a chain of maps
//!
//! ```rust
//! use lambars_coyoneda::control::lift;
//! use lambars_coyoneda::typeclass::VecKind;
//!
//! let pending = lift::<VecKind, _>(vec![1, 2, 3])
//!     .map(|x: i32| x + 1)
//!     .map(|x: i32| x * 2);
//!
//! // The vector is traversed once, here.
//! assert_eq!(pending.run(), vec![4, 6, 8]);
//! ```
//!
//! ## Switching encodings
//!
//! ```rust
//! use lambars_coyoneda::control::{Yoneda, lift};
//! use lambars_coyoneda::typeclass::OptionKind;
//!
//! let yoneda: Yoneda<OptionKind, i32> = lift::<OptionKind, _>(Some(20)).to_yoneda();
//! assert_eq!(yoneda.apply(|n: i32| n + 22), Some(42));
//! ```

mod coyoneda;
mod morphism_chain;
mod yoneda;

pub use coyoneda::{By, Coyoneda, CoyonedaKind, by, lift};
pub use yoneda::{Yoneda, YonedaKind};
