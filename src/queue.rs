//! Binary heap priority queue
//!
//! [`PriorityQueue`] is an array-backed binary heap of `(payload, priority)`
//! entries. Whether it surfaces the smallest or the largest priority first is
//! chosen once, at construction, through [`Polarity`].
//!
//! Payloads are opaque: only priorities are ever compared, so any `T` can be
//! stored. Priorities only need `PartialOrd + Copy`, which admits `f64`.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `top` / `top_key` | O(1)       |
//! | `second_best_key` | O(1)       |
//! | `len`             | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use keyed_pq::{Polarity, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new(Polarity::Max);
//! queue.push("10", 10).push("30", 30).push("20", 20);
//!
//! assert_eq!(queue.top(), Some(&"30"));
//! assert_eq!(queue.top_key(), Some(30));
//! assert_eq!(queue.second_best_key(), Some(20));
//! assert_eq!(queue.pop(), Ok("30"));
//! assert_eq!(queue.top_key(), Some(20));
//! ```

use crate::error::QueueError;
use crate::polarity::Polarity;

/// An associative binary-heap priority queue
///
/// Every successful `push` and `pop` bumps an internal version stamp, which
/// is what lets a [`Cursor`](crate::cursor::Cursor) notice that the queue
/// changed underneath it.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    /// Heap-ordered (payload, priority) pairs; index 0 is the root
    data: Vec<(T, P)>,
    polarity: Polarity,
    version: u64,
}

impl<T, P: PartialOrd + Copy> PriorityQueue<T, P> {
    /// Creates an empty queue with the given polarity
    pub fn new(polarity: Polarity) -> Self {
        Self::with_capacity(polarity, 0)
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(polarity: Polarity, capacity: usize) -> Self {
        log::trace!("new {} queue, capacity {}", polarity, capacity);
        Self {
            data: Vec::with_capacity(capacity),
            polarity,
            version: 0,
        }
    }

    /// Creates an empty queue from a polarity token (`"min"` or `"max"`)
    ///
    /// # Errors
    /// Returns [`QueueError::Configuration`] for any other token.
    pub fn from_token(token: &str) -> Result<Self, QueueError> {
        Ok(Self::new(token.parse()?))
    }

    /// Creates an empty min-queue
    pub fn min() -> Self {
        Self::new(Polarity::Min)
    }

    /// Creates an empty max-queue
    pub fn max() -> Self {
        Self::new(Polarity::Max)
    }

    /// The polarity this queue was built with
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of entries the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Modification stamp, bumped by every push and pop
    ///
    /// Two equal readings mean no entry was added or removed in between.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Inserts `payload` with the given priority and returns the queue
    ///
    /// Entries with equal priority come out in no particular order.
    pub fn push(&mut self, payload: T, priority: P) -> &mut Self {
        self.data.push((payload, priority));
        self.sift_up(self.data.len() - 1);
        self.bump();
        self
    }

    /// Returns the payload at the top of the queue, if any
    pub fn top(&self) -> Option<&T> {
        self.data.first().map(|(payload, _)| payload)
    }

    /// Alias of [`top`](Self::top)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<&T> {
        self.top()
    }

    /// Returns the priority at the top of the queue, if any
    pub fn top_key(&self) -> Option<P> {
        self.data.first().map(|&(_, priority)| priority)
    }

    /// Alias of [`top_key`](Self::top_key)
    pub fn next_key(&self) -> Option<P> {
        self.top_key()
    }

    /// Returns the top payload together with its priority
    pub fn peek(&self) -> Option<(&T, P)> {
        self.data.first().map(|(payload, priority)| (payload, *priority))
    }

    /// Removes the top entry and returns its payload
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to pop. The
    /// queue is left empty and usable.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.pop_entry().map(|(payload, _)| payload)
    }

    /// Removes the top entry and returns it with its priority
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to pop.
    pub fn pop_entry(&mut self) -> Result<(T, P), QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop().ok_or(QueueError::EmptyQueue)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        self.bump();
        Ok(entry)
    }

    /// Returns the priority that would be on top after one `pop`
    ///
    /// Returns `None` when fewer than two entries are queued. The runner-up
    /// is always a child of the root, so this is O(1) and does not touch
    /// the heap.
    pub fn second_best_key(&self) -> Option<P> {
        match self.data.as_slice() {
            [] | [_] => None,
            [_, (_, only)] => Some(*only),
            [_, (_, left), (_, right), ..] => {
                if self.polarity.prefers(right, left) {
                    Some(*right)
                } else {
                    Some(*left)
                }
            }
        }
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            log::trace!("clearing {} entries", self.data.len());
            self.data.clear();
            self.bump();
        }
    }

    /// Entries in heap-array order
    pub(crate) fn entries(&self) -> &[(T, P)] {
        &self.data
    }

    /// True if the entry at `a` belongs above the entry at `b`
    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.polarity.prefers(&self.data[a].1, &self.data[b].1)
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.outranks(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && self.outranks(left, best) {
                best = left;
            }
            if right < len && self.outranks(right, best) {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, P: PartialOrd + Copy> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new(Polarity::default())
    }
}
