//! Property-based tests for the effect-capability laws.
//!
//! Every provided capability, and a hand-rolled logging capability, must
//! satisfy:
//!
//! 1. **Left Identity**: `chain(wrap(a), f) == f(a)`
//! 2. **Right Identity**: `chain(m, wrap) == m`
//! 3. **Associativity**: `chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))`
//!
//! The logging capability is then used to drive `monadic_fold` and
//! `monadic_filter`, which are only trusted once its laws hold.

use effectfold::effect::{Effect, IdentityEffect, ListEffect, OptionEffect, ResultEffect};
use effectfold::fold::{monadic_filter, monadic_fold};
use effectfold::laws::{Law, check_associativity, check_left_identity, check_right_identity};
use proptest::prelude::*;
use rstest::rstest;
use std::convert::identity;

// =============================================================================
// Hand-rolled capabilities
// =============================================================================

/// Pairs every value with the messages logged while computing it.
#[derive(Debug, Clone, Copy)]
struct LogEffect;

impl<'a> Effect<'a> for LogEffect {
    type Of<T: 'a> = (T, Vec<String>);

    fn wrap<T: 'a>(&self, value: T) -> (T, Vec<String>) {
        (value, Vec::new())
    }

    fn chain<A: 'a, B: 'a, F>(&self, computation: (A, Vec<String>), mut continuation: F) -> (B, Vec<String>)
    where
        F: FnMut(A) -> (B, Vec<String>) + 'a,
    {
        let (value, mut log) = computation;
        let (next, more) = continuation(value);
        log.extend(more);
        (next, log)
    }
}

/// Logs in the wrong order: breaks associativity only when both sides log.
#[derive(Debug, Clone, Copy)]
struct ReversedLogEffect;

impl<'a> Effect<'a> for ReversedLogEffect {
    type Of<T: 'a> = (T, Vec<String>);

    fn wrap<T: 'a>(&self, value: T) -> (T, Vec<String>) {
        (value, Vec::new())
    }

    fn chain<A: 'a, B: 'a, F>(&self, computation: (A, Vec<String>), mut continuation: F) -> (B, Vec<String>)
    where
        F: FnMut(A) -> (B, Vec<String>) + 'a,
    {
        let (value, log) = computation;
        let (next, mut more) = continuation(value);
        more.extend(log.into_iter().rev());
        (next, more)
    }
}

fn logged(message: &str, value: i32) -> (i32, Vec<String>) {
    (value, vec![message.to_string()])
}

// =============================================================================
// Provided capabilities
// =============================================================================

proptest! {
    #[test]
    fn prop_option_laws(value in any::<i32>(), start in any::<Option<i32>>()) {
        let halve = |n: i32| (n % 2 == 0).then_some(n / 2);
        let increment = |n: i32| n.checked_add(1);

        prop_assert!(check_left_identity(&OptionEffect, value, halve, identity).is_ok());
        prop_assert!(check_right_identity(&OptionEffect, || start, identity).is_ok());
        prop_assert!(check_associativity(&OptionEffect, || start, halve, increment, identity).is_ok());
    }

    #[test]
    fn prop_result_laws(value in any::<i32>(), failed in any::<bool>()) {
        let effect = ResultEffect::<String>::new();
        let start = move || if failed { Err("start".to_string()) } else { Ok(value) };
        let checked_double = |n: i32| n.checked_mul(2).ok_or_else(|| "overflow".to_string());
        let non_negative = |n: i32| if n < 0 { Err("negative".to_string()) } else { Ok(n) };

        prop_assert!(check_left_identity(&effect, value, checked_double, identity).is_ok());
        prop_assert!(check_right_identity(&effect, start, identity).is_ok());
        prop_assert!(check_associativity(&effect, start, checked_double, non_negative, identity).is_ok());
    }

    #[test]
    fn prop_list_laws(value in any::<i16>(), start in prop::collection::vec(any::<i16>(), 0..6)) {
        let neighbours = |n: i16| vec![n.wrapping_sub(1), n.wrapping_add(1)];
        let keep_odd = |n: i16| if n % 2 != 0 { vec![n] } else { vec![] };

        prop_assert!(check_left_identity(&ListEffect, value, neighbours, identity).is_ok());
        prop_assert!(check_right_identity(&ListEffect, || start.clone(), identity).is_ok());
        prop_assert!(check_associativity(&ListEffect, || start.clone(), neighbours, keep_odd, identity).is_ok());
    }

    #[test]
    fn prop_identity_laws(value in any::<i32>()) {
        let double = |n: i32| n.wrapping_mul(2);
        let negate = |n: i32| n.wrapping_neg();

        prop_assert!(check_left_identity(&IdentityEffect, value, double, identity).is_ok());
        prop_assert!(check_right_identity(&IdentityEffect, || value, identity).is_ok());
        prop_assert!(check_associativity(&IdentityEffect, || value, double, negate, identity).is_ok());
    }

    #[test]
    fn prop_log_effect_laws(value in any::<i32>()) {
        let first = |n: i32| logged("first", n.wrapping_add(1));
        let second = |n: i32| logged("second", n.wrapping_mul(3));

        prop_assert!(check_left_identity(&LogEffect, value, first, identity).is_ok());
        prop_assert!(check_right_identity(&LogEffect, || logged("start", value), identity).is_ok());
        prop_assert!(check_associativity(&LogEffect, || logged("start", value), first, second, identity).is_ok());
    }

    #[test]
    fn prop_identity_step_fold_wraps_initial(
        initial in any::<i32>(),
        items in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        prop_assert_eq!(
            monadic_fold(&LogEffect, |total, _: &i32| LogEffect.wrap(total), initial, items.clone()),
            (initial, Vec::new())
        );
        prop_assert_eq!(
            monadic_fold(&ListEffect, |total, _: &i32| ListEffect.wrap(total), initial, items),
            vec![initial]
        );
    }

    #[test]
    fn prop_option_fold_agrees_with_try_fold(items in prop::collection::vec(any::<i32>(), 0..40)) {
        let expected = items.iter().try_fold(0_i32, |total, n| total.checked_add(*n));
        let result = monadic_fold(&OptionEffect, |total: i32, n: &i32| total.checked_add(*n), 0, items);
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Lawless capability is rejected
// =============================================================================

#[rstest]
fn reversed_log_breaks_associativity() {
    let first = |n: i32| logged("first", n);
    let second = |n: i32| logged("second", n);
    let violation = check_associativity(
        &ReversedLogEffect,
        || (0, vec!["a".to_string(), "b".to_string()]),
        first,
        second,
        identity,
    )
    .unwrap_err();

    assert_eq!(violation.law, Law::Associativity);
    assert!(violation.to_string().starts_with("associativity law violated"));
}

// =============================================================================
// Fold and filter on a validated hand-rolled capability
// =============================================================================

#[rstest]
fn log_effect_fold_records_every_step_in_order() {
    let (total, log) = monadic_fold(
        &LogEffect,
        |total: i32, n: &i32| (total + n, vec![format!("add {n}")]),
        0,
        [1, 2, 3],
    );
    assert_eq!(total, 6);
    assert_eq!(log, vec!["add 1", "add 2", "add 3"]);
}

#[rstest]
fn log_effect_filter_records_every_verdict() {
    let (kept, log) = monadic_filter(
        &LogEffect,
        |n: &i32| (*n > 1, vec![format!("checked {n}")]),
        vec![1, 2, 3],
    );
    assert_eq!(kept, vec![2, 3]);
    assert_eq!(log, vec!["checked 1", "checked 2", "checked 3"]);
}
