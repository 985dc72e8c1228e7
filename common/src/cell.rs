use std::cell::RefCell;
use std::rc::Rc;

/// Handle to state owned by a single-threaded event loop.
///
/// The async drivers only touch state through short closures, so no borrow
/// is ever held across an `.await`.
pub trait StateCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
