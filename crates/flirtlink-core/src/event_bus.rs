//! Event bus carrying request outcomes back to the page.
//!
//! Requests run as spawned futures on the single browser thread. When one
//! finishes it pushes its outcome here; the UI drains the queue each frame
//! and feeds every event through the reducer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use crate::page::PageEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<PageEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an outcome. Called from spawned request futures.
    pub fn emit(&self, event: PageEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events in arrival order. Called by the UI each frame.
    pub fn drain(&self) -> Vec<PageEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
