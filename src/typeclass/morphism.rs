//! Storable pure functions.
//!
//! [`Morphism`] is the bound every function handed to a [`Functor`](super::Functor),
//! a [`Coyoneda`](crate::control::Coyoneda) or a [`Yoneda`](crate::control::Yoneda)
//! must satisfy. It exists so that the `arc` feature can add `Send + Sync`
//! in one place instead of on every signature.

/// A pure function `A -> B` that can be stored and called any number of times.
///
/// Without the `arc` feature this is `Fn(A) -> B + 'static`.
/// With the `arc` feature it is additionally `Send + Sync`.
///
/// It is implemented for every qualifying closure and function item; there is
/// never a reason to implement it by hand.
///
/// # Examples
///
/// ```rust
/// use lambars_coyoneda::typeclass::Morphism;
///
/// fn apply_twice<M: Morphism<i32, i32>>(morphism: M, value: i32) -> i32 {
///     morphism(morphism(value))
/// }
///
/// assert_eq!(apply_twice(|x: i32| x + 3, 1), 7);
/// ```
#[cfg(not(feature = "arc"))]
pub trait Morphism<A, B>: Fn(A) -> B + 'static {}

#[cfg(not(feature = "arc"))]
impl<A, B, T> Morphism<A, B> for T where T: Fn(A) -> B + 'static {}

/// A pure function `A -> B` that can be stored, called any number of times,
/// and shared across threads.
///
/// # Examples
///
/// ```rust
/// use lambars_coyoneda::typeclass::Morphism;
///
/// fn apply_twice<M: Morphism<i32, i32>>(morphism: M, value: i32) -> i32 {
///     morphism(morphism(value))
/// }
///
/// assert_eq!(apply_twice(|x: i32| x + 3, 1), 7);
/// ```
#[cfg(feature = "arc")]
pub trait Morphism<A, B>: Fn(A) -> B + Send + Sync + 'static {}

#[cfg(feature = "arc")]
impl<A, B, T> Morphism<A, B> for T where T: Fn(A) -> B + Send + Sync + 'static {}

/// Reference-counted pointer: `Rc` by default, `Arc` with the `arc` feature.
#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted, type-erased [`Morphism`].
#[cfg(not(feature = "arc"))]
pub(crate) type SharedMorphism<A, B> = ReferenceCounter<dyn Fn(A) -> B>;

#[cfg(feature = "arc")]
pub(crate) type SharedMorphism<A, B> = ReferenceCounter<dyn Fn(A) -> B + Send + Sync>;

/// Erases a concrete morphism behind the shared pointer.
#[inline]
pub(crate) fn share<A, B, M>(morphism: M) -> SharedMorphism<A, B>
where
    M: Morphism<A, B>,
{
    ReferenceCounter::new(morphism)
}
