//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `F::fmap(fa, |x| x) == fa`
//! - **Composition Law**: `F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))`
//!
//! The instances for `CoyonedaKind` and `YonedaKind` are checked after
//! running, since the encodings themselves hold functions and have no `Eq`.

#![cfg(feature = "control")]

use lambars_coyoneda::control::{CoyonedaKind, Yoneda, YonedaKind, lift};
use lambars_coyoneda::typeclass::{
    BTreeSetKind, BoxKind, Functor, Identity, IdentityKind, OptionKind, ResultKind, SetToVec,
    VecDequeKind, VecKind,
};
use proptest::prelude::*;
use std::collections::VecDeque;

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

// =============================================================================
// Standard Library Instances
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionKind::fmap(value, |x: i32| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let left = OptionKind::fmap(OptionKind::fmap(value, increment), double);
        let right = OptionKind::fmap(value, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(VecKind::fmap(values.clone(), |x: i32| x), values);
    }

    #[test]
    fn prop_vec_composition_law(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let left = VecKind::fmap(VecKind::fmap(values.clone(), increment), double);
        let right = VecKind::fmap(values, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_string_composition_law(values in prop::collection::vec(".{0,8}", 0..16)) {
        let left = VecKind::fmap(VecKind::fmap(values.clone(), |s: String| s.len()), |n: usize| n * 3);
        let right = VecKind::fmap(values, |s: String| s.len() * 3);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_deque_composition_law(values in prop::collection::vec_deque(any::<i32>(), 0..32)) {
        let left = VecDequeKind::fmap(VecDequeKind::fmap(values.clone(), increment), double);
        let right: VecDeque<i32> = VecDequeKind::fmap(values, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_box_composition_law(value in any::<i32>()) {
        let left = BoxKind::fmap(BoxKind::fmap(Box::new(value), increment), double);
        let right = BoxKind::fmap(Box::new(value), |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(ResultKind::<String>::fmap(value.clone(), |x: i32| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let left = ResultKind::<String>::fmap(
            ResultKind::<String>::fmap(value.clone(), increment),
            double,
        );
        let right = ResultKind::<String>::fmap(value, |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let left = IdentityKind::fmap(IdentityKind::fmap(Identity(value), increment), double);
        let right = IdentityKind::fmap(Identity(value), |x: i32| double(increment(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Encoding Instances
// =============================================================================

proptest! {
    #[test]
    fn prop_coyoneda_kind_identity_law(values in prop::collection::btree_set(any::<i32>(), 0..16)) {
        let lifted = lift::<BTreeSetKind, _>(values.clone());
        let mapped = CoyonedaKind::<BTreeSetKind, i32>::fmap(lifted, |x: i32| x);
        let expected: Vec<i32> = values.into_iter().collect();
        prop_assert_eq!(mapped.fold_map(&SetToVec), expected);
    }

    #[test]
    fn prop_coyoneda_kind_composition_law(values in prop::collection::btree_set(any::<i32>(), 0..16)) {
        let left = CoyonedaKind::<BTreeSetKind, i32>::fmap(
            CoyonedaKind::<BTreeSetKind, i32>::fmap(lift::<BTreeSetKind, _>(values.clone()), increment),
            double,
        );
        let right = CoyonedaKind::<BTreeSetKind, i32>::fmap(
            lift::<BTreeSetKind, _>(values),
            |x: i32| double(increment(x)),
        );
        prop_assert_eq!(left.fold_map(&SetToVec), right.fold_map(&SetToVec));
    }

    #[test]
    fn prop_yoneda_kind_composition_law(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let left = YonedaKind::<VecKind, i32>::fmap(
            YonedaKind::<VecKind, i32>::fmap(Yoneda::<VecKind, _>::lift(values.clone()), increment),
            double,
        );
        let right = YonedaKind::<VecKind, i32>::fmap(
            Yoneda::<VecKind, _>::lift(values),
            |x: i32| double(increment(x)),
        );
        prop_assert_eq!(left.run(), right.run());
    }
}
