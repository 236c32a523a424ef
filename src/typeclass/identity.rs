//! Identity wrapper type - the identity functor.
//!
//! `Identity` holds exactly one value and adds no behaviour. It is the
//! simplest lawful [`Functor`], which makes it the natural target when a
//! deferred computation should just be evaluated, and the simplest model to
//! check laws against.

use super::functor::Functor;
use super::higher::TypeConstructor;
use super::morphism::Morphism;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use lambars_coyoneda::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns a mutable reference to the inner value.
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut A {
        &mut self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type WithType<T> = Identity<T>;
}

impl Functor for IdentityKind {
    #[inline]
    fn fmap<A, B, Function>(fa: Identity<A>, function: Function) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        Identity(function(fa.0))
    }
}
