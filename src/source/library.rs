//! Runtime loading of libclang
//!
//! `clang-sys` keeps the loaded library in thread-local storage, so the guard
//! here is reference counted per thread and is not `Send`.

use crate::error::{ParsingError, ParsingResult};
use std::cell::Cell;
use std::marker::PhantomData;
use tracing::{debug, warn};

#[derive(Clone, Copy, Default)]
struct LoadState {
    users: usize,
    owns_library: bool,
}

thread_local! {
    static STATE: Cell<LoadState> = Cell::new(LoadState::default());
}

/// Keeps libclang loaded on the current thread for as long as it lives
pub struct ClangLibrary {
    _not_send: PhantomData<*const ()>,
}

impl ClangLibrary {
    /// Load libclang if this is the first guard on the thread
    pub fn acquire() -> ParsingResult<Self> {
        STATE.with(|state| {
            let mut current = state.get();
            if current.users == 0 && !clang_sys::is_loaded() {
                clang_sys::load().map_err(|reason| ParsingError::LibraryLoad { reason })?;
                debug!("Loaded libclang");
                current.owns_library = true;
            }
            current.users += 1;
            state.set(current);
            Ok(ClangLibrary {
                _not_send: PhantomData,
            })
        })
    }

    /// Number of live guards on the current thread
    pub fn users() -> usize {
        STATE.with(|state| state.get().users)
    }
}

impl Drop for ClangLibrary {
    fn drop(&mut self) {
        STATE.with(|state| {
            let mut current = state.get();
            current.users = current.users.saturating_sub(1);
            if current.users == 0 && current.owns_library {
                current.owns_library = false;
                match clang_sys::unload() {
                    Ok(()) => debug!("Unloaded libclang"),
                    Err(e) => warn!("Failed to unload libclang: {e}"),
                }
            }
            state.set(current);
        });
    }
}
