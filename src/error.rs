//! Error type for queue operations
//!
//! Only three things can go wrong, and each one is a caller mistake rather
//! than a broken queue: an unknown polarity, popping an empty queue, and
//! mutating a queue while a guarded traversal is walking it. Peek-style
//! queries report emptiness with `None` instead.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The polarity token was neither `min` nor `max`
    Configuration {
        /// The rejected token, as given
        token: String,
    },
    /// `pop` was called on an empty queue
    EmptyQueue,
    /// The queue was pushed or popped while a traversal was in progress
    IteratorInvalidated,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Configuration { token } => {
                write!(
                    f,
                    "queue polarity must be either min or max, got {:?}",
                    token
                )
            }
            QueueError::EmptyQueue => write!(f, "pop called on an empty queue"),
            QueueError::IteratorInvalidated => {
                write!(
                    f,
                    "a change in the priority queue invalidated the current iterator"
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}
