use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::Brand;

/// A mutable cell owned by the region `'r`.
///
/// Clones share the same cell. Each accessor holds the cell's borrow only for
/// its own duration.
///
/// # Panics
///
/// Accessors panic when they re-enter the same cell, for example when the
/// closure passed to [`RegionRef::modify`] writes to the cell being modified.
pub struct RegionRef<'r, T> {
    cell: Rc<RefCell<T>>,
    _brand: Brand<'r>,
}

impl<T> RegionRef<'_, T> {
    pub(super) fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
            _brand: PhantomData,
        }
    }

    /// Returns a copy of the current value.
    pub fn read(&self) -> T
    where
        T: Clone,
    {
        self.cell.borrow().clone()
    }

    /// Inspects the current value without copying it.
    pub fn with<U, F>(&self, function: F) -> U
    where
        F: FnOnce(&T) -> U,
    {
        function(&self.cell.borrow())
    }

    /// Replaces the current value, returning the previous one.
    pub fn write(&self, value: T) -> T {
        self.cell.replace(value)
    }

    /// Replaces the current value with `function(current)`.
    pub fn modify<F>(&self, function: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = function(&self.cell.borrow());
        *self.cell.borrow_mut() = next;
    }

    /// Like [`RegionRef::modify`], returning a copy of the new value.
    pub fn modify_and_read<F>(&self, function: F) -> T
    where
        F: FnOnce(&T) -> T,
        T: Clone,
    {
        self.modify(function);
        self.read()
    }

    /// Mutates the current value in place, returning whatever `function` returns.
    pub fn update<U, F>(&self, function: F) -> U
    where
        F: FnOnce(&mut T) -> U,
    {
        function(&mut self.cell.borrow_mut())
    }
}

impl<T> Clone for RegionRef<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            _brand: PhantomData,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RegionRef<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("RegionRef")
            .field(&self.cell.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::region::run_region;
    use rstest::rstest;

    #[rstest]
    fn write_returns_previous_value() {
        let (previous, current) = run_region(|region| {
            let cell = region.new_ref(1);
            let previous = cell.write(2);
            (previous, cell.read())
        });
        assert_eq!((previous, current), (1, 2));
    }

    #[rstest]
    fn clones_share_the_cell() {
        let value = run_region(|region| {
            let cell = region.new_ref(10);
            let alias = cell.clone();
            alias.modify(|n| n * 2);
            cell.read()
        });
        assert_eq!(value, 20);
    }

    #[rstest]
    fn modify_and_read_returns_new_value() {
        let value = run_region(|region| region.new_ref(4).modify_and_read(|n| n + 1));
        assert_eq!(value, 5);
    }

    #[rstest]
    fn with_borrows_without_cloning() {
        let length = run_region(|region| {
            let cell = region.new_ref(vec![1, 2, 3]);
            cell.with(Vec::len)
        });
        assert_eq!(length, 3);
    }

    #[rstest]
    fn update_returns_closure_result() {
        let (popped, rest) = run_region(|region| {
            let stack = region.new_ref(vec![1, 2, 3]);
            let popped = stack.update(Vec::pop);
            (popped, stack.read())
        });
        assert_eq!(popped, Some(3));
        assert_eq!(rest, vec![1, 2]);
    }

    #[rstest]
    fn debug_shows_value() {
        let rendered = run_region(|region| format!("{:?}", region.new_ref(7)));
        assert_eq!(rendered, "RegionRef(7)");
    }
}
