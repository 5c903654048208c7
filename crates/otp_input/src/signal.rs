//! Shareable, versioned value cells.
//!
//! A [`Signal`] is the two-way binding point between an [`Otp`](crate::Otp)
//! and the application that hosts it. Clones share the same storage; every
//! write that changes the value bumps a version counter, which is how the
//! component notices writes made from outside its own event handlers.
//!
//! # Example
//!
//! ```rust
//! use otp_input::Signal;
//!
//! let code = Signal::new(String::new());
//! let observer = code.clone();
//!
//! code.set("12".to_string());
//! assert_eq!(observer.get(), "12");
//! assert_eq!(observer.version(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

struct Slot<T> {
    value: T,
    version: u64,
}

/// A shared value cell with change tracking.
pub struct Signal<T> {
    inner: Arc<RwLock<Slot<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.inner.read();
        f.debug_struct("Signal")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .finish()
    }
}

impl<T> Signal<T> {
    /// Creates a signal holding `value` at version 0.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Slot { value, version: 0 })),
        }
    }

    /// Returns the number of changing writes made so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read().value)
    }

    /// Returns true if both handles share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> Signal<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.read().value.clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Stores `value`, returning true if it differed from the current one.
    ///
    /// Writing an equal value leaves the version untouched, so observers
    /// are not notified of no-op writes.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.inner.write();
        if slot.value == value {
            return false;
        }
        slot.value = value;
        slot.version += 1;
        true
    }
}
