//! The default sequencing loop behind [`Effect::fold_steps`].
//!
//! Each round chains one continuation onto the accumulated computation. The
//! continuation pulls its element from the input only when it runs, so a
//! short-circuited computation never touches the rest of the input.
//!
//! A round whose continuation did not run ends the loop. Either the
//! computation stopped, or the capability defers continuations; in the
//! second case each continuation chains the next one itself when it finally
//! runs.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::effect::Effect;

/// Input elements pulled on demand and kept for replay across branches.
struct Pulled<I: Iterator> {
    source: RefCell<I>,
    buffered: RefCell<VecDeque<Rc<I::Item>>>,
    offset: Cell<usize>,
    exhausted: Cell<bool>,
}

impl<I: Iterator> Pulled<I> {
    const fn new(source: I) -> Self {
        Self {
            source: RefCell::new(source),
            buffered: RefCell::new(VecDeque::new()),
            offset: Cell::new(0),
            exhausted: Cell::new(false),
        }
    }

    /// The element at `index`, pulling from the source up to it if needed.
    fn get(&self, index: usize) -> Option<Rc<I::Item>> {
        let relative = index.checked_sub(self.offset.get())?;
        let mut buffered = self.buffered.borrow_mut();
        while buffered.len() <= relative {
            let Some(item) = self.source.borrow_mut().next() else {
                self.exhausted.set(true);
                return None;
            };
            buffered.push_back(Rc::new(item));
        }
        buffered.get(relative).cloned()
    }

    /// Forgets every element before `index`.
    fn release_before(&self, index: usize) {
        let mut buffered = self.buffered.borrow_mut();
        while self.offset.get() < index && buffered.pop_front().is_some() {
            self.offset.set(self.offset.get() + 1);
        }
    }
}

struct Steps<I: Iterator, S> {
    step: S,
    pulled: Pulled<I>,
    deferred: Cell<bool>,
}

fn continuation<'a, M, A, T, I, S>(
    effect: M,
    steps: Rc<Steps<I, S>>,
    index: usize,
    ran: Rc<Cell<bool>>,
) -> impl FnMut(A) -> M::Of<A> + 'a
where
    M: Effect<'a>,
    A: 'a,
    T: 'a,
    I: Iterator<Item = T> + 'a,
    S: Fn(A, &T) -> M::Of<A> + 'a,
{
    move |accumulator: A| {
        ran.set(true);
        let Some(item) = steps.pulled.get(index) else {
            return effect.wrap(accumulator);
        };
        let next = (steps.step)(accumulator, &item);
        if steps.deferred.get() {
            let following = continuation::<M, A, T, I, S>(
                effect.clone(),
                Rc::clone(&steps),
                index + 1,
                Rc::new(Cell::new(false)),
            );
            effect.chain::<A, A, _>(next, following)
        } else {
            next
        }
    }
}

/// Sequences `step` over `items` with plain `wrap` and `chain`.
pub(crate) fn chain_steps<'a, M, A, T, I, S>(effect: &M, step: S, initial: A, items: I) -> M::Of<A>
where
    M: Effect<'a>,
    A: 'a,
    T: 'a,
    I: Iterator<Item = T> + 'a,
    S: Fn(A, &T) -> M::Of<A> + 'a,
{
    let steps = Rc::new(Steps {
        step,
        pulled: Pulled::new(items),
        deferred: Cell::new(false),
    });
    let mut accumulated = effect.wrap(initial);
    let mut index = 0;
    loop {
        let ran = Rc::new(Cell::new(false));
        let next =
            continuation::<M, A, T, I, S>(effect.clone(), Rc::clone(&steps), index, Rc::clone(&ran));
        accumulated = effect.chain::<A, A, _>(accumulated, next);
        if !ran.get() {
            steps.deferred.set(true);
            break;
        }
        if steps.pulled.exhausted.get() {
            break;
        }
        index += 1;
        steps.pulled.release_before(index);
    }
    accumulated
}
