//! Single-integer observable model.

use log::info;
use spin::Mutex;

use crate::{Observable, Subscribers};

/// An observable integer score.
///
/// Every call to [`set_value`](Self::set_value) notifies all subscribers, with
/// no batching: observers receive the score and re-read [`value`](Self::value).
///
/// # Example
///
/// ```rust
/// use useful_mvc::{Observable, Score, Subscriber};
///
/// let score = Score::new(3);
/// let label = Subscriber::from_fn(|score: &Score, _| {
///     println!("Score: {}", score.value());
/// });
/// score.subscribe(label);
///
/// score.set_value(4);
/// assert_eq!(score.value(), 4);
/// ```
#[derive(Debug)]
pub struct Score {
    value: Mutex<i64>,
    subscribers: Subscribers<Score>,
}

impl Score {
    /// Create a score seeded with `value` and no subscribers.
    pub fn new(value: i64) -> Self {
        Self {
            value: Mutex::new(value),
            subscribers: Subscribers::new(),
        }
    }

    pub fn value(&self) -> i64 {
        *self.value.lock()
    }

    /// Overwrite the value, log it, then notify every subscriber exactly once.
    ///
    /// Input must already be a valid integer; parsing user text belongs to the
    /// caller.
    pub fn set_value(&self, value: i64) {
        *self.value.lock() = value;
        info!("Score#value=: {value}");

        self.notify_observers(&());
    }
}

impl Observable for Score {
    fn subscribers(&self) -> &Subscribers<Self> {
        &self.subscribers
    }
}
