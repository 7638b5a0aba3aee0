// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer registry for drag lifecycle events.
//!
//! ## Minimal example
//!
//! ```
//! use notch_range::observer::Observers;
//! use notch_range::types::{DragEvent, DragEventKind};
//!
//! let mut observers = Observers::new();
//! let id = observers.on(DragEventKind::DragEnd, |e| assert_eq!(e.value, "42"));
//! observers.trigger(&DragEvent::new(DragEventKind::DragEnd, "42"));
//! assert!(observers.off(DragEventKind::DragEnd, id));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{DragEvent, DragEventKind};

/// Handle returned by [`Observers::on`], used to deregister.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&DragEvent)>;

struct Entry {
    kind: DragEventKind,
    id: ListenerId,
    handler: Handler,
}

/// Handlers keyed by event kind, invoked in registration order.
#[derive(Default)]
pub struct Observers {
    entries: Vec<Entry>,
    next_id: u64,
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`.
    pub fn on(
        &mut self,
        kind: DragEventKind,
        handler: impl FnMut(&DragEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            kind,
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Deregister one handler. Returns whether it was registered for `kind`.
    pub fn off(&mut self, kind: DragEventKind, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.kind == kind && e.id == id));
        self.entries.len() != before
    }

    /// Deregister every handler for `kind`, returning how many were removed.
    pub fn off_all(&mut self, kind: DragEventKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.kind != kind);
        before - self.entries.len()
    }

    /// Number of handlers registered for `kind`.
    pub fn count(&self, kind: DragEventKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Invoke every handler registered for `event.kind`.
    pub fn trigger(&mut self, event: &DragEvent) {
        for entry in self.entries.iter_mut().filter(|e| e.kind == event.kind) {
            (entry.handler)(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&DragEvent) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |e: &DragEvent| sink.borrow_mut().push(e.value.clone()))
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();
        for n in 0..3 {
            let order = Rc::clone(&order);
            observers.on(DragEventKind::DragMove, move |_| order.borrow_mut().push(n));
        }
        observers.trigger(&DragEvent::new(DragEventKind::DragMove, "1"));
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn trigger_only_reaches_matching_kind() {
        let (log, handler) = recorder();
        let mut observers = Observers::new();
        observers.on(DragEventKind::DragStart, handler);
        observers.trigger(&DragEvent::new(DragEventKind::DragEnd, "9"));
        observers.trigger(&DragEvent::new(DragEventKind::DragStart, "3"));
        assert_eq!(*log.borrow(), vec![String::from("3")]);
    }

    #[test]
    fn off_requires_matching_kind() {
        let (log, handler) = recorder();
        let mut observers = Observers::new();
        let id = observers.on(DragEventKind::DragMove, handler);
        assert!(!observers.off(DragEventKind::DragEnd, id));
        assert!(observers.off(DragEventKind::DragMove, id));
        assert!(!observers.off(DragEventKind::DragMove, id));
        observers.trigger(&DragEvent::new(DragEventKind::DragMove, "5"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn off_all_clears_one_kind() {
        let mut observers = Observers::new();
        observers.on(DragEventKind::DragMove, |_| {});
        observers.on(DragEventKind::DragMove, |_| {});
        observers.on(DragEventKind::DragEnd, |_| {});
        assert_eq!(observers.off_all(DragEventKind::DragMove), 2);
        assert_eq!(observers.count(DragEventKind::DragMove), 0);
        assert_eq!(observers.count(DragEventKind::DragEnd), 1);
    }
}
