#![forbid(unsafe_code)]

//! Owned state cells and bindings.
//!
//! A [`StateCell`] is an owned storage cell whose writes synchronously
//! notify the render signal, so the driver knows a new frame is needed. A
//! [`Binding`] is a read/write closure pair over some cell without owning
//! it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The process-wide "needs render" signal.
///
/// State mutation marks the signal dirty and synchronously invokes the
/// registered hook, if any; the driver decides when to actually re-render.
#[derive(Default)]
pub struct RenderSignal {
    dirty: Cell<bool>,
    hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl RenderSignal {
    /// Create a signal, initially dirty so the first frame renders.
    #[must_use]
    pub fn new() -> Rc<Self> {
        let signal = Rc::new(Self::default());
        signal.dirty.set(true);
        signal
    }

    /// Mark dirty and invoke the hook.
    pub fn mark(&self) {
        self.dirty.set(true);
        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }
    }

    /// Whether a render has been requested since the last [`clear`].
    ///
    /// [`clear`]: RenderSignal::clear
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Acknowledge the request; called after a frame completes.
    pub fn clear(&self) {
        self.dirty.set(false);
    }

    /// Install the hook invoked on every mark.
    pub fn set_hook(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }
}

/// An owned storage cell wired to the render signal.
pub struct StateCell<T> {
    value: Rc<RefCell<T>>,
    signal: Rc<RenderSignal>,
}

impl<T> StateCell<T> {
    /// Create a cell holding `value`.
    #[must_use]
    pub fn new(value: T, signal: Rc<RenderSignal>) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            signal,
        }
    }

    /// Replace the value and request a render.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.signal.mark();
    }

    /// Mutate the value in place and request a render.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value.borrow_mut());
        self.signal.mark();
    }

    /// Read through the value without cloning.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.value.borrow())
    }
}

impl<T: Clone> StateCell<T> {
    /// A clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Clone + 'static> StateCell<T> {
    /// A non-owning read/write binding over this cell.
    #[must_use]
    pub fn binding(&self) -> Binding<T> {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(move || reader.get(), move |value| writer.set(value))
    }
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            signal: self.signal.clone(),
        }
    }
}

/// A read/write closure pair over some storage cell.
pub struct Binding<T> {
    read: Rc<dyn Fn() -> T>,
    write: Rc<dyn Fn(T)>,
}

impl<T> Binding<T> {
    /// Create a binding from accessor closures.
    pub fn new(read: impl Fn() -> T + 'static, write: impl Fn(T) + 'static) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.read)()
    }

    /// Write a new value.
    pub fn set(&self, value: T) {
        (self.write)(value);
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_starts_dirty() {
        let signal = RenderSignal::new();
        assert!(signal.is_dirty());
        signal.clear();
        assert!(!signal.is_dirty());
    }

    #[test]
    fn set_marks_signal_and_fires_hook() {
        let signal = RenderSignal::new();
        signal.clear();
        let fired = Rc::new(Cell::new(0));
        let count = fired.clone();
        signal.set_hook(move || count.set(count.get() + 1));

        let cell = StateCell::new(1, signal.clone());
        cell.set(2);
        assert_eq!(cell.get(), 2);
        assert!(signal.is_dirty());
        assert_eq!(fired.get(), 1);

        cell.update(|v| *v += 1);
        assert_eq!(cell.get(), 3);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn binding_reads_and_writes_the_cell() {
        let signal = RenderSignal::new();
        let cell = StateCell::new(String::from("a"), signal.clone());
        let binding = cell.binding();
        assert_eq!(binding.get(), "a");
        binding.set(String::from("b"));
        assert_eq!(cell.get(), "b");
        assert!(signal.is_dirty());
    }

    #[test]
    fn clones_share_storage() {
        let signal = RenderSignal::new();
        let cell = StateCell::new(0, signal);
        let alias = cell.clone();
        alias.set(7);
        assert_eq!(cell.get(), 7);
    }
}
