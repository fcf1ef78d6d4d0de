//! Scoped mutable state.
//!
//! A region is a lexical scope that owns mutable cells. Inside the scope,
//! cells are read and written freely; outside it, none of them can be
//! reached. Code that only mutates region-local state is therefore pure
//! when seen from the caller of [`run_region`].
//!
//! # Scoping
//!
//! [`run_region`] hands its body a `&Region<'r>` for a fresh lifetime `'r`
//! chosen by the body itself. Every [`RegionRef`] carries that lifetime, and
//! `'r` is invariant, so a handle can neither be returned from the body nor
//! stored in anything that outlives it. Handles are also neither `Send` nor
//! `Sync`.
//!
//! ```compile_fail
//! use effectfold::region::run_region;
//!
//! // The handle's lifetime cannot appear in the result type.
//! let escaped = run_region(|region| region.new_ref(0));
//! ```
//!
//! ```compile_fail
//! use effectfold::region::{run_region, RegionRef};
//!
//! let mut outside: Vec<RegionRef<'_, i32>> = Vec::new();
//! run_region(|region| outside.push(region.new_ref(0)));
//! ```
//!
//! ```compile_fail
//! use effectfold::region::run_region;
//!
//! run_region(|region| {
//!     let counter = region.new_ref(0);
//!     std::thread::spawn(move || counter.write(1));
//! });
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectfold::region::run_region;
//!
//! let total = run_region(|region| {
//!     let sum = region.new_ref(0);
//!     region.for_range(1..11, |n| sum.modify(|current| current + n));
//!     sum.read()
//! });
//! assert_eq!(total, 55);
//! ```

mod handle;

use std::cell::Cell;
use std::marker::PhantomData;
use std::ops::Range;

pub use handle::RegionRef;

/// Invariant marker tying values to one region.
pub(crate) type Brand<'r> = PhantomData<fn(&'r ()) -> &'r ()>;

/// A live region. Only reachable as `&Region<'r>` inside [`run_region`].
#[derive(Debug)]
pub struct Region<'r> {
    _brand: Brand<'r>,
    allocated: Cell<usize>,
}

impl<'r> Region<'r> {
    /// Allocates a new mutable cell in this region.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectfold::region::run_region;
    ///
    /// let value = run_region(|region| {
    ///     let cell = region.new_ref(String::from("a"));
    ///     cell.update(|text| text.push('b'));
    ///     cell.read()
    /// });
    /// assert_eq!(value, "ab");
    /// ```
    pub fn new_ref<T>(&self, value: T) -> RegionRef<'r, T> {
        self.allocated.set(self.allocated.get() + 1);
        RegionRef::new(value)
    }

    /// Number of cells allocated so far.
    pub fn allocated(&self) -> usize {
        self.allocated.get()
    }

    /// Runs `body` for every index in `range`, in ascending order.
    pub fn for_range<F>(&self, range: Range<usize>, body: F)
    where
        F: FnMut(usize),
    {
        range.for_each(body);
    }

    /// Runs `body` while `condition` holds, checking before every iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectfold::region::run_region;
    ///
    /// let steps = run_region(|region| {
    ///     let n = region.new_ref(27_u64);
    ///     let steps = region.new_ref(0);
    ///     region.while_loop(
    ///         || n.read() != 1,
    ///         || {
    ///             n.modify(|n| if n % 2 == 0 { n / 2 } else { 3 * n + 1 });
    ///             steps.modify(|s| s + 1);
    ///         },
    ///     );
    ///     steps.read()
    /// });
    /// assert_eq!(steps, 111);
    /// ```
    pub fn while_loop<C, F>(&self, mut condition: C, mut body: F)
    where
        C: FnMut() -> bool,
        F: FnMut(),
    {
        while condition() {
            body();
        }
    }
}

/// Runs `body` inside a fresh region and returns its result.
///
/// Every cell allocated in the region is dropped when `body` returns.
pub fn run_region<R, F>(body: F) -> R
where
    F: for<'r> FnOnce(&Region<'r>) -> R,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("run_region").entered();

    let region = Region {
        _brand: PhantomData,
        allocated: Cell::new(0),
    };
    let result = body(&region);

    #[cfg(feature = "tracing")]
    tracing::trace!(allocated = region.allocated(), "region closed");

    result
}

static_assertions::assert_not_impl_any!(RegionRef<'static, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Region<'static>: Sync);
