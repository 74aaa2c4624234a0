//! Caller-owned shared state handles

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

struct Slot<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

/// Read-write handle to a value owned by the caller
///
/// Clones alias the same value. Composition runs on the UI thread, so the
/// handle is `Rc`-based and deliberately `!Send`.
pub struct Binding<T> {
    slot: Rc<Slot<T>>,
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(Slot {
                value: RefCell::new(value),
                version: Cell::new(0),
            }),
        }
    }

    /// Borrow the current value for the duration of `f`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.value.borrow())
    }

    /// Replace the value and bump the version counter
    pub fn set(&self, value: T) {
        *self.slot.value.borrow_mut() = value;
        self.slot.version.set(self.slot.version.get() + 1);
    }

    /// Number of writes since the binding was created
    pub fn version(&self) -> u64 {
        self.slot.version.get()
    }

    /// Handle that can observe but never write the value
    pub fn read_only(&self) -> ReadBinding<T> {
        ReadBinding {
            slot: Rc::clone(&self.slot),
        }
    }

    /// True if both handles point at the same value
    pub fn ptr_eq(&self, other: &Binding<T>) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> T {
        self.slot.value.borrow().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &*self.slot.value.borrow())
            .field("version", &self.slot.version.get())
            .finish()
    }
}

/// Observe-only view of a [`Binding`]
pub struct ReadBinding<T> {
    slot: Rc<Slot<T>>,
}

impl<T> ReadBinding<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.value.borrow())
    }

    pub fn version(&self) -> u64 {
        self.slot.version.get()
    }
}

impl<T: Clone> ReadBinding<T> {
    pub fn get(&self) -> T {
        self.slot.value.borrow().clone()
    }
}

impl<T> Clone for ReadBinding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadBinding")
            .field(&*self.slot.value.borrow())
            .finish()
    }
}
