use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::runtime::RuntimeHandle;

type ObserverId = u64;
type Observer<T> = Rc<dyn Fn(&T)>;

struct StateCell<T> {
    value: RefCell<T>,
    observers: RefCell<SmallVec<[(ObserverId, Observer<T>); 4]>>,
    next_observer_id: Cell<ObserverId>,
    runtime: Option<RuntimeHandle>,
}

impl<T: Clone + 'static> StateCell<T> {
    fn notify(&self) {
        if let Some(runtime) = &self.runtime {
            runtime.schedule();
        }
        // Snapshot first: observers may subscribe, unsubscribe or write back.
        let observers: SmallVec<[Observer<T>; 4]> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        if observers.is_empty() {
            return;
        }
        let value = self.value.borrow().clone();
        for observer in observers {
            observer(&value);
        }
    }

    fn remove_observer(&self, id: ObserverId) {
        self.observers
            .borrow_mut()
            .retain(|(observer_id, _)| *observer_id != id);
    }
}

/// Observable, single-threaded value.
///
/// Writes that change the value notify every subscriber and, when the state
/// is bound to a runtime, request a new frame so the host redraws.
pub struct MutableState<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    /// Creates a state that is not tied to any runtime.
    pub fn new(value: T) -> Self {
        Self::build(value, None)
    }

    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self::build(value, Some(runtime))
    }

    fn build(value: T, runtime: Option<RuntimeHandle>) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(value),
                observers: RefCell::new(SmallVec::new()),
                next_observer_id: Cell::new(1),
                runtime,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn value(&self) -> T {
        self.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Mutates the value in place and notifies, changed or not.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.inner.value.borrow_mut();
            f(&mut value)
        };
        self.inner.notify();
        result
    }

    /// Registers `observer`, called with the new value after each change.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        let weak: Weak<StateCell<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(cell) = weak.upgrade() {
                cell.remove_observer(id);
            }
        })
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: self.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> MutableState<T> {
    /// Writes `value`, notifying only when it differs from the current one.
    pub fn set(&self, value: T) {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            self.inner.notify();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: MutableState<T>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn value(&self) -> T {
        self.inner.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribe(observer)
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &*self.inner.inner.value.borrow())
            .finish()
    }
}

/// Handle returned by `subscribe`. Dropping it removes the observer.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
