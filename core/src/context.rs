//! Guarded shared-state slots for process-wide UI state.
//!
//! # Design
//! Each piece of UI state (active post, creation-flow progress, notification
//! badge, generic progress indicator) lives in a [`ContextSlot`] owned by an
//! explicit [`AppContexts`] holder that the application shell passes down.
//! A slot has exactly two lifecycle states: *unmounted* (no provider; every
//! accessor call fails) and *mounted* (provider alive; accessors succeed and
//! observe live mutations). [`ContextSlot::mount`] transitions to mounted
//! and returns a [`ProviderGuard`] whose drop transitions back.
//!
//! Acquiring a handle on an unmounted slot fails synchronously with
//! [`ContextError::Unmounted`] — never a silent default state. All access
//! happens on the single UI thread, so the cells are `Rc<RefCell<_>>` and
//! none of these types are `Send`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ContextError;

type Cell<T> = Rc<RefCell<Option<Rc<RefCell<T>>>>>;

/// One shared-state slot with a mount/unmount lifecycle.
#[derive(Debug)]
pub struct ContextSlot<T> {
    name: &'static str,
    cell: Cell<T>,
}

impl<T> ContextSlot<T> {
    /// Create an unmounted slot. `name` identifies the context in usage
    /// errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// Mount a provider with `initial` state. The returned guard unmounts
    /// the slot when dropped. Mounting over a live provider is a usage
    /// error; the two-state lifecycle has no nesting.
    pub fn mount(&self, initial: T) -> Result<ProviderGuard<T>, ContextError> {
        let mut cell = self.cell.borrow_mut();
        if cell.is_some() {
            return Err(ContextError::AlreadyMounted { context: self.name });
        }
        *cell = Some(Rc::new(RefCell::new(initial)));
        Ok(ProviderGuard {
            cell: Rc::clone(&self.cell),
        })
    }

    /// The accessor: the current state-and-mutator pair. Fails when no
    /// provider is mounted.
    pub fn handle(&self) -> Result<ContextHandle<T>, ContextError> {
        self.cell
            .borrow()
            .as_ref()
            .map(|state| ContextHandle {
                state: Rc::clone(state),
            })
            .ok_or(ContextError::Unmounted { context: self.name })
    }

    pub fn is_mounted(&self) -> bool {
        self.cell.borrow().is_some()
    }
}

impl<T> Clone for ContextSlot<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            cell: Rc::clone(&self.cell),
        }
    }
}

/// RAII provider handle returned by [`ContextSlot::mount`]; dropping it
/// unmounts the slot.
#[derive(Debug)]
pub struct ProviderGuard<T> {
    cell: Cell<T>,
}

impl<T> Drop for ProviderGuard<T> {
    fn drop(&mut self) {
        self.cell.borrow_mut().take();
    }
}

/// The state-and-mutator pair handed out by a mounted slot.
///
/// Handles acquired from the same mounted slot share one cell, so a `set`
/// through one handle is observed by every other. A handle acquired before
/// an unmount keeps its cell alive but is detached from any later provider.
#[derive(Debug)]
pub struct ContextHandle<T> {
    state: Rc<RefCell<T>>,
}

impl<T> ContextHandle<T> {
    /// Replace the current state.
    pub fn set(&self, value: T) {
        *self.state.borrow_mut() = value;
    }

    /// Mutate the current state in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.state.borrow_mut());
    }

    /// Read the current state through a closure without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow())
    }
}

impl<T: Clone> ContextHandle<T> {
    /// Snapshot of the current state.
    pub fn get(&self) -> T {
        self.state.borrow().clone()
    }
}

impl<T> Clone for ContextHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

// ---------------------------------------------------------------------------
// Application contexts
// ---------------------------------------------------------------------------

/// The post currently selected for detail view or inline actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePost {
    pub post_id: Option<i64>,
}

/// Position inside the post-creation wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationProgress {
    pub step: u8,
    pub total_steps: u8,
}

/// Unseen-notification badge count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationBadge {
    pub unseen: u32,
}

/// Generic busy indicator shown during long-running operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressIndicator {
    pub visible: bool,
}

/// The four application context slots, constructed once by the application
/// shell and passed down to whatever needs guarded access.
#[derive(Debug, Clone)]
pub struct AppContexts {
    pub active_post: ContextSlot<ActivePost>,
    pub creation: ContextSlot<CreationProgress>,
    pub notifications: ContextSlot<NotificationBadge>,
    pub progress: ContextSlot<ProgressIndicator>,
}

impl AppContexts {
    pub fn new() -> Self {
        Self {
            active_post: ContextSlot::new("active_post"),
            creation: ContextSlot::new("creation_progress"),
            notifications: ContextSlot::new("notification_badge"),
            progress: ContextSlot::new("progress_indicator"),
        }
    }
}

impl Default for AppContexts {
    fn default() -> Self {
        Self::new()
    }
}
