//! Shared-ownership wrapper for heap-backed values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted handle used by every heap-backed [`Value`](super::Value)
/// variant.
///
/// The constructor is private to the value module, so heap values can only
/// be made through `Value::` factory methods. Cloning a `Heap` shares the
/// allocation; equality of host objects is identity of that allocation.
#[derive(PartialEq, Eq)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T: ?Sized> Heap<T> {
    /// Wrap an existing `Arc`. Only `Value` factories call this.
    #[inline]
    pub(super) fn from_arc(inner: Arc<T>) -> Self {
        Heap(inner)
    }

    /// `true` when both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_reaches_inner() {
        let h = Heap::from_arc(Arc::<str>::from("hello"));
        assert_eq!(&*h, "hello");
    }

    #[test]
    fn clone_shares_allocation() {
        let h1 = Heap::from_arc(Arc::new(42i64));
        let h2 = h1.clone();
        assert!(Heap::ptr_eq(&h1, &h2));
    }

    #[test]
    fn separate_allocations_are_distinct() {
        let h1 = Heap::from_arc(Arc::new(1u8));
        let h2 = Heap::from_arc(Arc::new(1u8));
        assert!(!Heap::ptr_eq(&h1, &h2));
        assert!(h1 == h2);
    }
}
