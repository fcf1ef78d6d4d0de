#![cfg(feature = "async")]
//! Tests for folding and filtering with the asynchronous capability.
//!
//! Steps must run strictly one after another: a step is created only once
//! the previous step's future has completed, and dropping the composed
//! future stops the remaining steps from ever starting.

use effectfold::effect::{AsyncEffect, Effect};
use effectfold::fold::{monadic_filter, monadic_fold};
use effectfold::laws::{check_associativity, check_left_identity, check_right_identity};
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn delayed_add(log: Rc<RefCell<Vec<String>>>) -> impl Fn(u64, &u64) -> LocalBoxFuture<'static, u64> {
    move |total: u64, delay: &u64| {
        let delay = *delay;
        let log = Rc::clone(&log);
        log.borrow_mut().push(format!("start {delay}"));
        AsyncEffect.from_future(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            log.borrow_mut().push(format!("end {delay}"));
            total + delay
        })
    }
}

#[tokio::test(start_paused = true)]
async fn steps_are_sequenced_not_parallel() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let total = monadic_fold(&AsyncEffect, delayed_add(Rc::clone(&log)), 0, vec![30, 10, 20]).await;

    assert_eq!(total, 60);
    assert_eq!(
        *log.borrow(),
        vec!["start 30", "end 30", "start 10", "end 10", "start 20", "end 20"]
    );
}

#[tokio::test]
async fn nothing_runs_until_polled() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let computation = monadic_fold(
        &AsyncEffect,
        move |total: i32, n: &i32| {
            counter.set(counter.get() + 1);
            AsyncEffect.wrap(total + n)
        },
        0,
        vec![1, 2, 3],
    );

    assert_eq!(calls.get(), 0);
    assert_eq!(computation.await, 6);
    assert_eq!(calls.get(), 3);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_fold_stops_remaining_steps() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let computation = monadic_fold(&AsyncEffect, delayed_add(Rc::clone(&log)), 0, vec![10; 10]);

    let outcome = tokio::time::timeout(Duration::from_millis(25), computation).await;
    assert!(outcome.is_err());

    tokio::time::sleep(Duration::from_millis(500)).await;
    let started = log.borrow().iter().filter(|entry| entry.starts_with("start")).count();
    assert_eq!(started, 3);
}

#[tokio::test]
async fn aborting_before_first_poll_runs_no_step() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let computation = monadic_fold(
        &AsyncEffect,
        move |total: i32, n: &i32| {
            counter.set(counter.get() + 1);
            AsyncEffect.wrap(total + n)
        },
        0,
        vec![1, 2, 3],
    );

    let (abortable, handle) = futures::future::abortable(computation);
    handle.abort();

    assert!(abortable.await.is_err());
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn filter_awaits_each_predicate() {
    let result = monadic_filter(
        &AsyncEffect,
        |n: &u32| {
            let n = *n;
            AsyncEffect.from_future(async move {
                tokio::task::yield_now().await;
                n % 2 == 1
            })
        },
        1..=9,
    )
    .await;

    assert_eq!(result, vec![1, 3, 5, 7, 9]);
}

#[test]
fn million_element_async_fold_polls_in_constant_stack() {
    let computation = monadic_fold(&AsyncEffect, |total: u64, n: &u64| AsyncEffect.wrap(total + n), 0, 1..=1_000_000);
    assert_eq!(futures::executor::block_on(computation), 500_000_500_000);
}

#[test]
fn million_element_async_filter_polls_in_constant_stack() {
    let computation = monadic_filter(&AsyncEffect, |n: &u32| AsyncEffect.wrap(n % 4 == 0), 0..1_000_000_u32);
    let kept = futures::executor::block_on(computation);
    assert_eq!(kept.len(), 250_000);
    assert_eq!(kept.last(), Some(&999_996));
}

#[tokio::test(start_paused = true)]
async fn elements_are_pulled_only_as_steps_complete() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let pulls = Rc::clone(&log);
    let computation = monadic_fold(
        &AsyncEffect,
        delayed_add(Rc::clone(&log)),
        0,
        vec![10, 20].into_iter().inspect(move |n| pulls.borrow_mut().push(format!("pull {n}"))),
    );

    assert!(log.borrow().is_empty());
    assert_eq!(computation.await, 30);
    assert_eq!(
        *log.borrow(),
        vec!["pull 10", "start 10", "end 10", "pull 20", "start 20", "end 20"]
    );
}

#[test]
fn async_capability_obeys_laws() {
    let observe = |computation: LocalBoxFuture<'static, i32>| futures::executor::block_on(computation);
    let increment = |n: i32| AsyncEffect.wrap(n.wrapping_add(1));
    let double = |n: i32| AsyncEffect.wrap(n.wrapping_mul(2));

    assert!(check_left_identity(&AsyncEffect, 20, increment, observe).is_ok());
    assert!(check_right_identity(&AsyncEffect, || AsyncEffect.wrap(5), observe).is_ok());
    assert!(check_associativity(&AsyncEffect, || AsyncEffect.wrap(5), increment, double, observe).is_ok());
}
