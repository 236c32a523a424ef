//! # lambars-coyoneda
//!
//! Deferred, fused mapping over arbitrary type constructors.
//!
//! ## Overview
//!
//! A [`Coyoneda`](control::Coyoneda) pairs a wrapped value `F<P>` with a
//! pending function `P -> A`. Mapping over it composes functions instead of
//! traversing the structure, so any chain of `map` calls costs a single
//! `fmap` when the value is finally run. Because the wrapped value is never
//! touched until then, a `Coyoneda` can be built over type constructors that
//! have no [`Functor`](typeclass::Functor) instance at all.
//!
//! - **Type Classes**: higher-kinded brands, `Functor`, natural transformations
//! - **Function Composition**: `identity`, the unit of composition
//! - **Control Structures**: `Coyoneda` and its dual `Yoneda`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type-constructor brands, `Functor`, natural transformations
//! - `compose`: Function composition utilities
//! - `control`: `Coyoneda` and `Yoneda` (implies `typeclass` and `compose`)
//! - `arc`: Store pending functions behind `Arc` and require them to be
//!   `Send + Sync`, making the encodings shareable across threads
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_coyoneda::prelude::*;
//!
//! let pending = lift::<VecKind, _>(vec![1, 2, 3])
//!     .map(|x: i32| x + 1)
//!     .map(|x: i32| x * 2);
//!
//! assert_eq!(pending.run(), vec![4, 6, 8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_coyoneda::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
