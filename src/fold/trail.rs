//! Structurally shared record of kept elements.
//!
//! Branches of a filter share the elements kept before they diverged, so
//! extending one branch must not copy or disturb another. A `Trail` is a
//! persistent snoc list: `push` allocates one node and shares the rest.

use std::rc::Rc;

struct Node<T> {
    value: T,
    previous: Trail<T>,
}

pub(super) struct Trail<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> Trail<T> {
    pub(super) const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a trail with `value` appended; `self` is left untouched.
    pub(super) fn push(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                value,
                previous: self.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Copies the kept elements out, oldest first.
    pub(super) fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.length);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            values.push(node.value.clone());
            cursor = node.previous.head.as_deref();
        }
        values.reverse();
        values
    }
}

impl<T> Clone for Trail<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

// Unlinks uniquely owned nodes one at a time so long trails do not recurse.
impl<T> Drop for Trail<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.previous.head.take(),
                Err(_) => break,
            }
        }
    }
}
