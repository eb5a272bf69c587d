//! Process-wide access to the interaction core.
//!
//! The host delivers input on a single UI thread, so the handle is
//! thread-local: the core is created on first access and lives until the
//! thread exits. Calling [`with_core`] from inside another `with_core`
//! closure panics.

use super::vam_core::VamCore;
use std::cell::RefCell;

thread_local! {
    static CORE: RefCell<Option<VamCore>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's core, creating it on first use.
pub fn with_core<R>(f: impl FnOnce(&mut VamCore) -> R) -> R {
    CORE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let core = slot.get_or_insert_with(|| {
            log::debug!("Creating interaction core");
            VamCore::new()
        });
        f(core)
    })
}

/// Has this thread's core been created yet?
pub fn is_initialized() -> bool {
    CORE.with(|cell| cell.borrow().is_some())
}
