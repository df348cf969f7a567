//! Associative Priority Queue for Rust
//!
//! This crate provides [`PriorityQueue`], a binary heap that maps arbitrary
//! payloads to numeric priorities and surfaces either the smallest or the
//! largest priority first, as chosen at construction.
//!
//! # Features
//!
//! - **Min or max polarity**: fixed per queue through [`Polarity`], which can
//!   also be parsed from a `"min"`/`"max"` token
//! - **O(log n) push and pop**, O(1) peek
//! - **O(1) second-best query**: [`PriorityQueue::second_best_key`] reads the
//!   runner-up priority without extracting anything
//! - **Guarded traversal**: [`Cursor`] and [`PriorityQueue::try_for_each`]
//!   fail with [`QueueError::IteratorInvalidated`] if the queue is pushed or
//!   popped mid-walk, instead of silently skipping or repeating entries
//! - **Iterator adapters**: borrowing [`Iter`], priority-ordered
//!   [`DrainSorted`], and `Extend`
//!
//! # Example
//!
//! ```rust
//! use keyed_pq::{Polarity, PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new(Polarity::Min);
//! queue.push("write", 2.0).push("read", 1.0).push("sleep", 8.0);
//!
//! assert_eq!(queue.top(), Some(&"read"));
//! assert_eq!(queue.second_best_key(), Some(2.0));
//!
//! assert_eq!(queue.pop(), Ok("read"));
//! assert_eq!(queue.pop(), Ok("write"));
//! assert_eq!(queue.pop(), Ok("sleep"));
//! assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
//! assert_eq!(queue.top(), None);
//! ```

pub mod cursor;
pub mod error;
pub mod iter;
pub mod polarity;
pub mod queue;

pub use cursor::Cursor;
pub use error::QueueError;
pub use iter::{DrainSorted, Iter};
pub use polarity::Polarity;
pub use queue::PriorityQueue;
