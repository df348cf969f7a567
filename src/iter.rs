//! Iterator adapters
//!
//! Conveniences layered over the queue so it plugs into ordinary Rust
//! iterator code:
//!
//! - [`Iter`]: borrowing iterator in heap-array order. While it is alive the
//!   borrow checker rules out mutation, so no runtime guard is needed.
//! - [`DrainSorted`]: pops entries one at a time, yielding them in priority
//!   order.
//! - `Extend<(T, P)>` for bulk insertion.
//!
//! For a traversal that lets the caller mutate the queue between steps, see
//! [`Cursor`](crate::cursor::Cursor).
//!
//! # Example
//!
//! ```rust
//! use keyed_pq::PriorityQueue;
//!
//! let mut queue = PriorityQueue::min();
//! queue.extend([("c", 3), ("a", 1), ("b", 2)]);
//!
//! let total: i32 = queue.iter().map(|(_, p)| p).sum();
//! assert_eq!(total, 6);
//!
//! let order: Vec<_> = queue.drain_sorted().map(|(payload, _)| payload).collect();
//! assert_eq!(order, vec!["a", "b", "c"]);
//! assert!(queue.is_empty());
//! ```

use std::iter::FusedIterator;
use std::slice;

use crate::queue::PriorityQueue;

/// Borrowing iterator over `(&payload, priority)` in heap-array order
#[derive(Debug, Clone)]
pub struct Iter<'a, T, P> {
    inner: slice::Iter<'a, (T, P)>,
}

impl<'a, T, P: Copy> Iterator for Iter<'a, T, P> {
    type Item = (&'a T, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(payload, priority)| (payload, *priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P: Copy> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P: Copy> FusedIterator for Iter<'_, T, P> {}

/// Draining iterator yielding `(payload, priority)` in priority order
///
/// Each step is one `pop`. Dropping it early leaves the rest queued.
#[derive(Debug)]
pub struct DrainSorted<'a, T, P: PartialOrd + Copy> {
    queue: &'a mut PriorityQueue<T, P>,
}

impl<T, P: PartialOrd + Copy> Iterator for DrainSorted<'_, T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_entry().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, P: PartialOrd + Copy> ExactSizeIterator for DrainSorted<'_, T, P> {}

impl<T, P: PartialOrd + Copy> FusedIterator for DrainSorted<'_, T, P> {}

impl<T, P: PartialOrd + Copy> PriorityQueue<T, P> {
    /// Iterates over the entries in heap-array order (not sorted)
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            inner: self.entries().iter(),
        }
    }

    /// Calls `f` on every entry and returns the queue
    ///
    /// The queue is borrowed for the whole walk, so `f` cannot change it.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, P),
    {
        for (payload, priority) in self.iter() {
            f(payload, priority);
        }
        self
    }

    /// Pops every entry in priority order
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue, returning its entries in priority order
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        self.drain_sorted().collect()
    }
}

impl<'a, T, P: PartialOrd + Copy> IntoIterator for &'a PriorityQueue<T, P> {
    type Item = (&'a T, P);
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P: PartialOrd + Copy> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (payload, priority) in iter {
            self.push(payload, priority);
        }
    }
}
