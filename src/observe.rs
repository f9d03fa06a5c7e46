//! One-shot visibility registry backing the scroll-reveal cards.
//!
//! Maps an opaque element handle to a callback that fires on the first
//! "intersecting" report and never again. The registry knows nothing
//! about the DOM or `IntersectionObserver`; the component layer wires
//! whichever detection primitive the environment provides (or a
//! fallback) into `report`. Revealed and cancelled entries are removed
//! immediately, so memory stays bounded by the number of elements that
//! have not yet scrolled into view.

use std::collections::HashMap;

/// Identity of one element registered for reveal. Never reused within
/// a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(u64);

type RevealFn = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct RevealRegistry {
    next_id: u64,
    pending: HashMap<RevealHandle, RevealFn>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback to run the first time the element is
    /// reported intersecting.
    pub fn register(&mut self, on_reveal: RevealFn) -> RevealHandle {
        let handle = RevealHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle, on_reveal);
        handle
    }

    /// Feeds one intersection report for `handle`. Returns whether the
    /// reveal fired. Non-intersecting reports, repeat reports, and
    /// reports for unknown handles are all no-ops.
    pub fn report(&mut self, handle: RevealHandle, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.pending.remove(&handle) {
            Some(on_reveal) => {
                on_reveal();
                true
            }
            None => false,
        }
    }

    /// Drops a registration without invoking it, for elements removed
    /// from the tree before they were ever revealed. Returns whether
    /// anything was still registered.
    pub fn cancel(&mut self, handle: RevealHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn spy(registry: &mut RevealRegistry) -> (RevealHandle, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let handle = registry.register(Box::new(move || counter.set(counter.get() + 1)));
        (handle, fired)
    }

    #[test]
    fn fires_once_and_only_on_intersection() {
        let mut registry = RevealRegistry::new();
        let (handle, fired) = spy(&mut registry);

        assert!(!registry.report(handle, false));
        assert_eq!(fired.get(), 0);
        assert_eq!(registry.pending(), 1);

        assert!(registry.report(handle, true));
        assert_eq!(fired.get(), 1);
        assert_eq!(registry.pending(), 0);

        // Later reports of either polarity change nothing.
        assert!(!registry.report(handle, false));
        assert!(!registry.report(handle, true));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn handles_are_independent() {
        let mut registry = RevealRegistry::new();
        let (a, fired_a) = spy(&mut registry);
        let (b, fired_b) = spy(&mut registry);
        assert_ne!(a, b);

        registry.report(a, true);
        assert_eq!(fired_a.get(), 1);
        assert_eq!(fired_b.get(), 0);
        assert_eq!(registry.pending(), 1);

        registry.report(b, true);
        assert_eq!(fired_b.get(), 1);
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn cancel_before_reveal_never_fires() {
        let mut registry = RevealRegistry::new();
        let (handle, fired) = spy(&mut registry);

        assert!(registry.cancel(handle));
        assert!(!registry.report(handle, true));
        assert_eq!(fired.get(), 0);

        // Cancelling twice is a no-op.
        assert!(!registry.cancel(handle));
    }

    #[test]
    fn revealed_entries_are_detached() {
        let mut registry = RevealRegistry::new();
        let (handle, _fired) = spy(&mut registry);
        assert_eq!(registry.pending(), 1);

        registry.report(handle, true);
        assert_eq!(registry.pending(), 0);
        assert!(!registry.cancel(handle));
    }
}
