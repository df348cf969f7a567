//! Ordering polarity
//!
//! A queue is either a min-queue or a max-queue, fixed when it is built.
//! [`Polarity`] is that choice, and it also owns the single comparison the
//! heap uses everywhere: [`Polarity::prefers`].
//!
//! Polarity can be given as the typed enum or parsed from a token such as
//! `"min"` or `"max"`. Parsing is where an invalid polarity is rejected:
//!
//! ```rust
//! use keyed_pq::{Polarity, QueueError};
//!
//! assert_eq!("max".parse::<Polarity>(), Ok(Polarity::Max));
//! assert_eq!(":Min".parse::<Polarity>(), Ok(Polarity::Min));
//! assert!(matches!(
//!     "sideways".parse::<Polarity>(),
//!     Err(QueueError::Configuration { .. })
//! ));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::QueueError;

/// Which end of the priority range the queue surfaces first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    /// Smallest priority first
    Min,
    /// Largest priority first
    #[default]
    Max,
}

impl Polarity {
    /// Returns true if `a` must sit above `b` in the heap.
    ///
    /// This is strict: equal keys are never preferred over one another, and
    /// neither are incomparable ones (NaN), so they never trigger a swap.
    #[inline]
    pub fn prefers<P: PartialOrd>(self, a: &P, b: &P) -> bool {
        match self {
            Polarity::Min => a < b,
            Polarity::Max => a > b,
        }
    }

    /// The token this polarity parses from
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Min => "min",
            Polarity::Max => "max",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = QueueError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        let name = trimmed.strip_prefix(':').unwrap_or(trimmed);

        if name.eq_ignore_ascii_case("min") {
            Ok(Polarity::Min)
        } else if name.eq_ignore_ascii_case("max") {
            Ok(Polarity::Max)
        } else {
            log::debug!("rejecting queue polarity token {:?}", token);
            Err(QueueError::Configuration {
                token: token.to_owned(),
            })
        }
    }
}

impl TryFrom<&str> for Polarity {
    type Error = QueueError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}
