//! Combinators shared by the composition utilities.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `|x| f(identity(x))` and `|x| identity(f(x))` both behave as `f`.
///
/// Lowering a [`Yoneda`](crate::control::Yoneda) applies it to `identity`.
///
/// # Examples
///
/// ```
/// use lambars_coyoneda::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
