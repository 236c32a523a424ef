//! Stack-safe storage for the pending functions of a deferred mapping.
//!
//! Every `map` on a [`Coyoneda`](super::Coyoneda) or [`Yoneda`](super::Yoneda)
//! appends one function. Wrapping the previous function in a new closure
//! would make both calling and dropping the result recurse once per `map`,
//! so the functions are kept type-erased (`Box<dyn Any>` in and out) in a
//! persistent singly linked list and applied in a loop.
//!
//! # Invariants
//!
//! - **Type alignment**: the first step takes `P`, each step's output is the
//!   next step's input, and the last step returns `A`
//! - **Persistence**: `then` never mutates a link, so clones of one chain can
//!   be extended independently while sharing their common prefix
//! - **Iterative drop**: dropping a chain never recurses through its links

use std::any::Any;
use std::marker::PhantomData;

use crate::typeclass::{Morphism, ReferenceCounter, SharedMorphism, share};

type ErasedValue = Box<dyn Any>;

type Step = SharedMorphism<ErasedValue, ErasedValue>;

struct Link {
    step: Step,
    previous: Option<ReferenceCounter<Link>>,
}

/// A composed function `P -> A` held as a list of type-erased steps.
pub(crate) struct MorphismChain<P, A> {
    last: Option<ReferenceCounter<Link>>,
    length: usize,
    _types: PhantomData<fn(P) -> A>,
}

impl<A: 'static> MorphismChain<A, A> {
    /// The empty chain, behaving as the identity.
    #[inline]
    pub(crate) const fn identity() -> Self {
        Self {
            last: None,
            length: 0,
            _types: PhantomData,
        }
    }
}

impl<P, A> MorphismChain<P, A> {
    /// Number of steps.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.length
    }
}

impl<P: 'static, A: 'static> MorphismChain<P, A> {
    /// A chain of the single step `function`.
    #[inline]
    pub(crate) fn new<Function>(function: Function) -> Self
    where
        Function: Morphism<P, A>,
    {
        MorphismChain::<P, P>::identity().then(function)
    }

    /// Appends `function` after the existing steps in O(1).
    pub(crate) fn then<B, Function>(mut self, function: Function) -> MorphismChain<P, B>
    where
        B: 'static,
        Function: Morphism<A, B>,
    {
        let step: Step = share(move |input: ErasedValue| -> ErasedValue {
            Box::new(function(recover::<A>(input)))
        });
        MorphismChain {
            last: Some(ReferenceCounter::new(Link {
                step,
                previous: self.last.take(),
            })),
            length: self.length + 1,
            _types: PhantomData,
        }
    }

    /// Flattens the chain into one function that runs the steps in a loop.
    pub(crate) fn into_function(self) -> impl Morphism<P, A> {
        let steps = self.steps();
        move |pivot: P| {
            let mut value: ErasedValue = Box::new(pivot);
            for step in &steps {
                value = step(value);
            }
            recover::<A>(value)
        }
    }

    fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.length);
        let mut cursor = self.last.as_deref();
        while let Some(link) = cursor {
            steps.push(link.step.clone());
            cursor = link.previous.as_deref();
        }
        steps.reverse();
        steps
    }
}

// Steps are only linked by `then`, whose signature lines the types up.
fn recover<T: 'static>(value: ErasedValue) -> T {
    *value
        .downcast::<T>()
        .expect("Type mismatch in morphism chain")
}

impl<P, A> Clone for MorphismChain<P, A> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            length: self.length,
            _types: PhantomData,
        }
    }
}

impl<P, A> Drop for MorphismChain<P, A> {
    fn drop(&mut self) {
        let mut cursor = self.last.take();
        while let Some(link) = cursor {
            // Stops at the first link another chain still holds.
            cursor =
                ReferenceCounter::into_inner(link).and_then(|mut owned| owned.previous.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DEEP: usize = 100_000;

    fn deep_chain(length: usize) -> MorphismChain<i64, i64> {
        let mut chain = MorphismChain::<i64, i64>::identity();
        for _ in 0..length {
            chain = chain.then(|x: i64| x + 1);
        }
        chain
    }

    #[rstest]
    fn identity_returns_input() {
        let function = MorphismChain::<String, String>::identity().into_function();
        assert_eq!(function("same".to_string()), "same");
    }

    #[rstest]
    fn steps_run_in_insertion_order() {
        let function = MorphismChain::<i32, i32>::new(|x: i32| x + 1)
            .then(|x: i32| x * 10)
            .then(|x: i32| format!("={x}"))
            .into_function();
        assert_eq!(function(2), "=30");
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    fn len_counts_steps(#[case] length: usize) {
        assert_eq!(deep_chain(length).len(), length);
    }

    #[rstest]
    fn flattened_function_is_reusable() {
        let function = deep_chain(3).into_function();
        assert_eq!(function(0), 3);
        assert_eq!(function(10), 13);
    }

    #[rstest]
    fn clones_extend_independently() {
        let base = deep_chain(2);
        let doubled = base.clone().then(|x: i64| x * 2).into_function();
        let negated = base.then(|x: i64| -x).into_function();
        assert_eq!(doubled(1), 6);
        assert_eq!(negated(1), -3);
    }

    #[rstest]
    fn deep_chain_runs_without_recursion() {
        let function = deep_chain(DEEP).into_function();
        assert_eq!(function(0), 100_000);
    }

    #[rstest]
    fn deep_chain_drops_without_recursion() {
        drop(deep_chain(DEEP));
    }

    #[rstest]
    fn deep_shared_prefix_drops_in_either_order() {
        let base = deep_chain(DEEP);
        let extended = base.clone().then(|x: i64| x - 1);
        drop(base);
        assert_eq!(extended.clone().into_function()(0), 99_999);
        drop(extended);
    }
}
