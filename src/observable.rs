//! Observer registration and synchronous change notification.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::fmt;

use log::trace;
use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{ObservableError, ObservableResult};

/// Capability of being told that a subject changed.
///
/// `S` is the subject type and `A` the type of the extra arguments passed along
/// with each notification (`()` for the models in this crate).
///
/// Closures implement this trait via the blanket implementation, so any
/// `Fn(&S, &A)` can be subscribed. Observers receive the subject itself and are
/// expected to re-read whatever state they present through its accessors.
pub trait Observer<S, A = ()> {
    /// Called once per notification cycle, after the subject's state changed.
    fn on_changed(&self, subject: &S, args: &A);
}

impl<S, A, F> Observer<S, A> for F
where
    F: Fn(&S, &A),
{
    fn on_changed(&self, subject: &S, args: &A) {
        self(subject, args)
    }
}

/// Shared handle to an [`Observer`], used to subscribe and later unsubscribe it.
///
/// Identity is the handle's: clones of one `Subscriber` are the same subscriber,
/// while two handles built from identical closures are not. Subscribing the same
/// handle twice puts it in the list twice.
pub struct Subscriber<S, A = ()>(Arc<Box<dyn Observer<S, A> + Send + Sync>>);

impl<S, A> Clone for Subscriber<S, A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S, A> fmt::Debug for Subscriber<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber").finish_non_exhaustive()
    }
}

impl<S, A> Subscriber<S, A> {
    /// Wrap an observer in a new handle.
    pub fn new<O>(observer: O) -> Self
    where
        O: Observer<S, A> + Send + Sync + 'static,
    {
        Self(Arc::new(Box::new(observer)))
    }

    /// Wrap a closure in a new handle.
    ///
    /// Equivalent to [`Subscriber::new`], but lets the compiler infer the
    /// closure's argument types.
    ///
    /// ```rust
    /// use useful_mvc::{Observable, Score, Subscriber};
    ///
    /// let score = Score::new(1);
    /// score.subscribe(Subscriber::from_fn(|score: &Score, _| {
    ///     assert_eq!(score.value(), 2);
    /// }));
    /// score.set_value(2);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&S, &A) + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Whether both handles refer to the same subscriber.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn notify(&self, subject: &S, args: &A) {
        self.0.on_changed(subject, args);
    }
}

/// Ordered subscriber list embedded in every observable subject.
///
/// Insertion order is notification order. Entries are only ever removed through
/// [`remove`](Self::remove).
///
/// # Re-entrancy
///
/// [`notify`](Self::notify) copies the list before invoking anyone and holds no
/// lock while observers run. An observer may therefore subscribe or unsubscribe
/// on the same subject mid-notification; the change applies from the next cycle,
/// and the cycle in progress still reaches every observer it started with.
pub struct Subscribers<S, A = ()> {
    entries: Mutex<Vec<Subscriber<S, A>>>,
}

impl<S, A> Default for Subscribers<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for Subscribers<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.len())
            .finish()
    }
}

impl<S, A> Subscribers<S, A> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append a subscriber.
    pub fn push(&self, subscriber: Subscriber<S, A>) {
        let mut entries = self.entries.lock();
        entries.push(subscriber);
        trace!("subscribed, {} subscriber(s)", entries.len());
    }

    /// Remove the first occurrence of `subscriber`.
    ///
    /// Fails with [`ObservableError::NotFound`] when it is not in the list.
    pub fn remove(&self, subscriber: &Subscriber<S, A>) -> ObservableResult<()> {
        let mut entries = self.entries.lock();
        let index = entries
            .iter()
            .position(|entry| entry.same_as(subscriber))
            .ok_or(ObservableError::NotFound)?;
        entries.remove(index);
        trace!("unsubscribed, {} subscriber(s)", entries.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Invoke every current subscriber in order with `subject` and `args`.
    ///
    /// Returns once all of them have returned.
    pub fn notify(&self, subject: &S, args: &A) {
        let snapshot = self.entries.lock().clone();
        trace!("notifying {} subscriber(s)", snapshot.len());
        for subscriber in &snapshot {
            subscriber.notify(subject, args);
        }
    }
}

/// A subject that observers can watch.
///
/// Implementors only hand out their embedded [`Subscribers`]; subscription
/// management and notification come with the trait.
///
/// # Example
///
/// ```rust
/// use useful_mvc::{Observable, Subscriber, Subscribers};
///
/// struct Thermometer {
///     subscribers: Subscribers<Thermometer, f32>,
/// }
///
/// impl Observable<f32> for Thermometer {
///     fn subscribers(&self) -> &Subscribers<Self, f32> {
///         &self.subscribers
///     }
/// }
///
/// let thermometer = Thermometer { subscribers: Subscribers::new() };
/// let display = Subscriber::from_fn(|_: &Thermometer, celsius: &f32| {
///     assert_eq!(*celsius, 21.5);
/// });
///
/// thermometer.subscribe(display.clone());
/// thermometer.notify_observers(&21.5);
/// assert!(thermometer.unsubscribe(&display).is_ok());
/// assert!(thermometer.unsubscribe(&display).is_err());
/// ```
pub trait Observable<A = ()>: Sized {
    /// The subscriber list owned by this subject.
    fn subscribers(&self) -> &Subscribers<Self, A>;

    /// Append `subscriber` to the notification list.
    fn subscribe(&self, subscriber: Subscriber<Self, A>) {
        self.subscribers().push(subscriber);
    }

    /// Remove the first occurrence of `subscriber`.
    ///
    /// Fails with [`ObservableError::NotFound`] if it is not subscribed, which
    /// includes unsubscribing the same handle twice.
    fn unsubscribe(&self, subscriber: &Subscriber<Self, A>) -> ObservableResult<()> {
        self.subscribers().remove(subscriber)
    }

    /// Notify every subscriber, in subscription order, passing `self` and `args`.
    fn notify_observers(&self, args: &A) {
        self.subscribers().notify(self, args);
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    /// Whether at least one subscriber is registered.
    fn is_observed(&self) -> bool {
        !self.subscribers().is_empty()
    }
}
