//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, the evidence that a type
//! constructor supports a structure-preserving `map`. It is implemented on
//! brand types (see [`TypeConstructor`]) rather than on the containers
//! themselves, so the evidence can be demanded at exactly the call that needs
//! it: a [`Coyoneda`](crate::control::Coyoneda) is built without it and only
//! asks for it in `run`.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! Nothing in this crate checks the laws at runtime. An instance that breaks
//! them makes `Coyoneda` fusion observable.
//!
//! # Examples
//!
//! ```rust
//! use lambars_coyoneda::typeclass::{Functor, OptionKind, VecKind};
//!
//! let transformed = OptionKind::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let doubled = VecKind::fmap(vec![1, 2, 3], |n: i32| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::collections::VecDeque;

use super::higher::{BoxKind, OptionKind, ResultKind, TypeConstructor, VecDequeKind, VecKind};
use super::morphism::Morphism;

/// Evidence that a type constructor supports mapping.
///
/// `Functor` is implemented on a brand `F` and maps `F::WithType<A>` to
/// `F::WithType<B>`. The function may be called any number of times (once per
/// element for collections, zero times for an empty container).
///
/// # Examples
///
/// ```rust
/// use lambars_coyoneda::typeclass::{BoxKind, Functor};
///
/// let boxed = BoxKind::fmap(Box::new(20), |n: i32| n + 1);
/// assert_eq!(*boxed, 21);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside `fa`, preserving its shape.
    fn fmap<A, B, Function>(fa: Self::WithType<A>, function: Function) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>;

    /// Discards the values inside the functor, replacing each with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_coyoneda::typeclass::{Functor, VecKind};
    ///
    /// assert_eq!(VecKind::void(vec![1, 2]), vec![(), ()]);
    /// ```
    #[inline]
    fn void<A>(fa: Self::WithType<A>) -> Self::WithType<()>
    where
        A: 'static,
    {
        Self::fmap::<A, (), _>(fa, |_| ())
    }
}

// =============================================================================
// Standard Library Instances
// =============================================================================

impl Functor for OptionKind {
    #[inline]
    fn fmap<A, B, Function>(fa: Option<A>, function: Function) -> Option<B>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        fa.map(function)
    }
}

impl Functor for VecKind {
    #[inline]
    fn fmap<A, B, Function>(fa: Vec<A>, function: Function) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Functor for VecDequeKind {
    #[inline]
    fn fmap<A, B, Function>(fa: VecDeque<A>, function: Function) -> VecDeque<B>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Functor for BoxKind {
    #[inline]
    fn fmap<A, B, Function>(fa: Box<A>, function: Function) -> Box<B>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        Box::new(function(*fa))
    }
}

impl<E> Functor for ResultKind<E> {
    #[inline]
    fn fmap<A, B, Function>(fa: Result<A, E>, function: Function) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        Function: Morphism<A, B>,
    {
        fa.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // OptionKind
    // =========================================================================

    #[rstest]
    #[case(Some(5), Some("5".to_string()))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(OptionKind::fmap(input, |n: i32| n.to_string()), expected);
    }

    #[rstest]
    fn option_void() {
        assert_eq!(OptionKind::void(Some(5)), Some(()));
        assert_eq!(OptionKind::void::<i32>(None), None);
    }

    // =========================================================================
    // VecKind / VecDequeKind
    // =========================================================================

    #[rstest]
    fn vec_fmap_transforms_every_element() {
        assert_eq!(VecKind::fmap(vec![1, 2, 3], |n: i32| n * 2), vec![2, 4, 6]);
    }

    #[rstest]
    fn vec_fmap_empty() {
        let result: Vec<String> = VecKind::fmap(Vec::<i32>::new(), |n: i32| n.to_string());
        assert!(result.is_empty());
    }

    #[rstest]
    fn vec_deque_fmap_keeps_order() {
        let deque: VecDeque<i32> = VecDeque::from(vec![3, 1, 2]);
        let result = VecDequeKind::fmap(deque, |n: i32| n * 10);
        assert_eq!(result, VecDeque::from(vec![30, 10, 20]));
    }

    // =========================================================================
    // BoxKind / ResultKind
    // =========================================================================

    #[rstest]
    fn box_fmap() {
        assert_eq!(*BoxKind::fmap(Box::new("hello"), |s: &'static str| s.len()), 5);
    }

    #[rstest]
    #[case(Ok(5), Ok(10))]
    #[case(Err("error"), Err("error"))]
    fn result_fmap(
        #[case] input: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(ResultKind::<&str>::fmap(input, |n: i32| n * 2), expected);
    }

    // =========================================================================
    // Laws (spot checks; property tests live in tests/functor_laws.rs)
    // =========================================================================

    #[rstest]
    fn vec_identity_law() {
        let values = vec![1, 2, 3];
        assert_eq!(VecKind::fmap(values.clone(), |x: i32| x), values);
    }

    #[rstest]
    fn vec_composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;
        let left = VecKind::fmap(VecKind::fmap(vec![1, 2, 3], function1), function2);
        let right = VecKind::fmap(vec![1, 2, 3], move |x| function2(function1(x)));
        assert_eq!(left, right);
    }
}
