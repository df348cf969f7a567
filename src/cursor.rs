//! Modification-guarded traversal
//!
//! A [`Cursor`] walks a queue in heap-array order (not sorted order) without
//! holding a borrow on it between steps. Instead it remembers the queue's
//! version stamp when it was created and checks it before every step. If the
//! queue was pushed or popped in the meantime the cursor fails with
//! [`QueueError::IteratorInvalidated`] rather than skipping or repeating
//! entries that the sift moved around.
//!
//! The guard is the same idea as a generational handle: the cursor is a
//! detached token that is validated on use.
//!
//! ```rust
//! use keyed_pq::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::max();
//! queue.push("a", 1).push("b", 2);
//!
//! let mut cursor = queue.cursor();
//! assert!(cursor.next(&queue).unwrap().is_some());
//!
//! queue.push("c", 3);
//! assert_eq!(cursor.next(&queue), Err(QueueError::IteratorInvalidated));
//! ```

use crate::error::QueueError;
use crate::queue::PriorityQueue;

/// Where a cursor is in its walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Walking,
    Done,
    Aborted,
}

/// A detached, version-guarded position in a [`PriorityQueue`]
///
/// Obtained from [`PriorityQueue::cursor`]. Once it has reported
/// exhaustion or invalidation it keeps doing so.
#[derive(Debug, Clone)]
pub struct Cursor {
    version: u64,
    position: usize,
    state: State,
}

impl Cursor {
    /// Advances the cursor, returning the next entry of `queue`
    ///
    /// Returns `Ok(None)` once every entry has been visited.
    ///
    /// # Errors
    /// Returns [`QueueError::IteratorInvalidated`] if `queue` was pushed or
    /// popped since the cursor was created.
    pub fn next<'q, T, P>(
        &mut self,
        queue: &'q PriorityQueue<T, P>,
    ) -> Result<Option<(&'q T, P)>, QueueError>
    where
        P: PartialOrd + Copy,
    {
        match self.state {
            State::Aborted => return Err(QueueError::IteratorInvalidated),
            State::Done => return Ok(None),
            State::Walking => {}
        }

        if queue.version() != self.version {
            log::debug!(
                "traversal aborted after {} entries: queue version {} != {}",
                self.position,
                queue.version(),
                self.version
            );
            self.state = State::Aborted;
            return Err(QueueError::IteratorInvalidated);
        }

        match queue.entries().get(self.position) {
            Some((payload, priority)) => {
                self.position += 1;
                Ok(Some((payload, *priority)))
            }
            None => {
                self.state = State::Done;
                Ok(None)
            }
        }
    }

    /// Number of entries handed out so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor has been invalidated
    pub fn is_aborted(&self) -> bool {
        self.state == State::Aborted
    }
}

impl<T, P: PartialOrd + Copy> PriorityQueue<T, P> {
    /// Starts a guarded traversal of the queue
    pub fn cursor(&self) -> Cursor {
        Cursor {
            version: self.version(),
            position: 0,
            state: State::Walking,
        }
    }

    /// Calls `f` on every entry, letting it mutate the queue
    ///
    /// The callback gets the queue back mutably together with a clone of the
    /// current payload. If it pushes or pops, the traversal stops right after
    /// that callback returns and this method fails with
    /// [`QueueError::IteratorInvalidated`]; whatever the callbacks already
    /// did stays done. On success the queue is returned for chaining.
    ///
    /// ```rust
    /// use keyed_pq::{PriorityQueue, QueueError};
    ///
    /// let mut queue = PriorityQueue::max();
    /// for i in 0..6 {
    ///     queue.push(i, i);
    /// }
    ///
    /// let mut seen = 0;
    /// let result = queue.try_for_each(|q, _, _| {
    ///     seen += 1;
    ///     if seen == 4 {
    ///         q.push(99, 99);
    ///     }
    /// });
    ///
    /// assert_eq!(result.err(), Some(QueueError::IteratorInvalidated));
    /// assert_eq!(seen, 4);
    /// ```
    ///
    /// # Errors
    /// Returns [`QueueError::IteratorInvalidated`] if the callback changed
    /// the queue.
    pub fn try_for_each<F>(&mut self, mut f: F) -> Result<&mut Self, QueueError>
    where
        T: Clone,
        F: FnMut(&mut Self, T, P),
    {
        let mut cursor = self.cursor();
        loop {
            let entry = cursor
                .next(self)?
                .map(|(payload, priority)| (payload.clone(), priority));
            match entry {
                Some((payload, priority)) => f(self, payload, priority),
                None => return Ok(self),
            }
        }
    }

    /// Maps every entry through `f` under the traversal guard
    ///
    /// # Errors
    /// Returns [`QueueError::IteratorInvalidated`] if `f` changed the queue;
    /// the values mapped so far are discarded.
    pub fn try_map<U, F>(&mut self, mut f: F) -> Result<Vec<U>, QueueError>
    where
        T: Clone,
        F: FnMut(&mut Self, T, P) -> U,
    {
        let mut out = Vec::with_capacity(self.len());
        self.try_for_each(|queue, payload, priority| {
            out.push(f(queue, payload, priority));
        })?;
        Ok(out)
    }

    /// Collects the entries accepted by `keep` under the traversal guard
    ///
    /// # Errors
    /// Returns [`QueueError::IteratorInvalidated`] if `keep` changed the
    /// queue.
    pub fn try_filter<F>(&mut self, mut keep: F) -> Result<Vec<(T, P)>, QueueError>
    where
        T: Clone,
        F: FnMut(&mut Self, &T, P) -> bool,
    {
        let mut out = Vec::new();
        self.try_for_each(|queue, payload, priority| {
            if keep(queue, &payload, priority) {
                out.push((payload, priority));
            }
        })?;
        Ok(out)
    }
}
