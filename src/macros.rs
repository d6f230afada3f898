//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// ```rust,ignore
/// debug_log!("Loaded {} orders", orders.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// Acquire a **mutable** borrow from a `RefCell` (or `Rc<RefCell>`).
/// If another mutable borrow is still active the call panics – the standard
/// panic message emitted by `RefCell::borrow_mut()` is preserved.
#[macro_export]
macro_rules! mut_borrow {
    ($cell:expr) => {
        $cell.borrow_mut()
    };
}
