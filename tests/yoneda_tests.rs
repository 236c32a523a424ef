//! Integration tests for `Yoneda<F, A>`.
//!
//! Tests cover:
//! - `apply` as the polymorphic function `(A -> B) -> F<B>`
//! - Conversions to and from `Coyoneda`
//! - Natural transformations on the dual encoding

#![cfg(feature = "control")]

use lambars_coyoneda::compose::identity;
use lambars_coyoneda::control::{Coyoneda, Yoneda, lift};
use lambars_coyoneda::typeclass::{
    BoxKind, BoxToIdentity, Functor, Identity, OptionKind, VecKind, VecToOption,
};
use rstest::rstest;

#[rstest]
fn apply_can_target_several_result_types() {
    let yoneda = Yoneda::<VecKind, _>::lift(vec![1, 2, 3]).map(|x: i32| x * 2);

    let as_strings = yoneda.clone().apply(|x: i32| x.to_string());
    let as_floats = yoneda.clone().apply(|x: i32| f64::from(x) / 4.0);
    let as_flags = yoneda.apply(|x: i32| x > 3);

    assert_eq!(as_strings, vec!["2", "4", "6"]);
    assert_eq!(as_floats, vec![0.5, 1.0, 1.5]);
    assert_eq!(as_flags, vec![false, true, true]);
}

#[rstest]
#[case(vec![])]
#[case(vec![5])]
#[case(vec![5, 6, 7])]
fn apply_equals_fmap_of_run(#[case] values: Vec<i32>) {
    let yoneda = Yoneda::<VecKind, _>::lift(values).map(|x: i32| x - 5);
    let expected = VecKind::fmap(yoneda.clone().run(), |x: i32| x * x);
    assert_eq!(yoneda.apply(|x: i32| x * x), expected);
}

#[rstest]
fn apply_identity_is_run() {
    let yoneda = Yoneda::<OptionKind, _>::lift(Some("yo")).map(|s: &str| s.len());
    assert_eq!(yoneda.clone().apply(identity::<usize>), yoneda.run());
}

#[rstest]
fn coyoneda_to_yoneda_and_back() {
    let coyoneda = lift::<VecKind, _>(vec![1, 2]).map(|x: i32| x + 100);
    let yoneda: Yoneda<VecKind, i32> = coyoneda.into();
    let back: Coyoneda<VecKind, i32> = yoneda.into();
    assert_eq!(back.map(|x: i32| x / 2).run(), vec![50, 51]);
}

#[rstest]
fn transform_then_apply() {
    let head = Yoneda::<VecKind, _>::lift(vec![9, 8, 7])
        .transform(&VecToOption)
        .apply(|x: i32| x * 11);
    assert_eq!(head, Some(99));
}

#[rstest]
fn transform_box_to_identity() {
    let unboxed = Yoneda::<BoxKind, _>::lift(Box::new(3))
        .map(|x: i32| x.pow(3))
        .transform(&BoxToIdentity)
        .run();
    assert_eq!(unboxed, Identity(27));
}
