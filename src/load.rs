//! Page-load sequencing: a loading overlay is held for a fixed time,
//! fades out, and the page content fades in shortly after.
//!
//! The timeline is modelled as a three-phase enum with pure,
//! elapsed-time-driven transitions so the 2000ms/300ms contract can be
//! tested with a simulated clock. The component driver in `main.rs`
//! schedules one `gloo_timers` timeout per non-terminal phase.

/// How long the overlay is held fully opaque after mount.
pub const OVERLAY_HOLD_MS: u32 = 2_000;

/// Gap between the overlay starting to fade and the content fading in.
pub const CONTENT_DELAY_MS: u32 = 300;

/// Duration of both cross-fades (CSS transition duration).
pub const FADE_MS: u32 = 500;

/// Phase of the page-load timeline. Strictly forward, time-driven,
/// never revisited; `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Overlay fully shown, content invisible.
    Loading,
    /// Overlay fading out; content not yet shown.
    Transitioning,
    /// Overlay gone, content fully visible.
    Ready,
}

impl LoadPhase {
    /// Phase as a pure function of milliseconds elapsed since mount.
    pub fn at_elapsed(elapsed_ms: u32) -> Self {
        if elapsed_ms < OVERLAY_HOLD_MS {
            LoadPhase::Loading
        } else if elapsed_ms < OVERLAY_HOLD_MS + CONTENT_DELAY_MS {
            LoadPhase::Transitioning
        } else {
            LoadPhase::Ready
        }
    }

    /// Successor phase. `Ready` is a fixed point.
    pub fn next(self) -> Self {
        match self {
            LoadPhase::Loading => LoadPhase::Transitioning,
            LoadPhase::Transitioning | LoadPhase::Ready => LoadPhase::Ready,
        }
    }

    /// Delay before the next transition, or `None` once terminal.
    pub fn delay_to_next(self) -> Option<u32> {
        match self {
            LoadPhase::Loading => Some(OVERLAY_HOLD_MS),
            LoadPhase::Transitioning => Some(CONTENT_DELAY_MS),
            LoadPhase::Ready => None,
        }
    }

    /// The overlay intercepts pointer input only while fully shown;
    /// it lets clicks through the moment it starts fading.
    pub fn overlay_interactive(self) -> bool {
        self == LoadPhase::Loading
    }

    /// Content is instructed to appear only in the terminal phase.
    pub fn content_shown(self) -> bool {
        self == LoadPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn phase_at_elapsed_boundaries() {
        assert_eq!(LoadPhase::at_elapsed(0), LoadPhase::Loading);
        assert_eq!(LoadPhase::at_elapsed(1_999), LoadPhase::Loading);
        assert_eq!(LoadPhase::at_elapsed(2_000), LoadPhase::Transitioning);
        assert_eq!(LoadPhase::at_elapsed(2_299), LoadPhase::Transitioning);
        assert_eq!(LoadPhase::at_elapsed(2_300), LoadPhase::Ready);
        assert_eq!(LoadPhase::at_elapsed(u32::MAX), LoadPhase::Ready);
    }

    #[test]
    fn phases_advance_strictly_forward() {
        assert_eq!(LoadPhase::Loading.next(), LoadPhase::Transitioning);
        assert_eq!(LoadPhase::Transitioning.next(), LoadPhase::Ready);
        assert_eq!(LoadPhase::Ready.next(), LoadPhase::Ready);
    }

    #[test]
    fn schedule_matches_elapsed_model() {
        // Walking the schedule table must land on the same phases the
        // elapsed-time model predicts.
        let mut phase = LoadPhase::Loading;
        let mut clock = 0u32;
        while let Some(delay) = phase.delay_to_next() {
            clock += delay;
            phase = phase.next();
            assert_eq!(phase, LoadPhase::at_elapsed(clock));
        }
        assert_eq!(clock, 2_300);
        assert_eq!(phase, LoadPhase::Ready);
    }

    #[test]
    fn overlay_and_content_visibility() {
        assert!(LoadPhase::Loading.overlay_interactive());
        assert!(!LoadPhase::Transitioning.overlay_interactive());
        assert!(!LoadPhase::Ready.overlay_interactive());

        assert!(!LoadPhase::Loading.content_shown());
        assert!(!LoadPhase::Transitioning.content_shown());
        assert!(LoadPhase::Ready.content_shown());
    }

    /// Minimal mock of a cancel-on-drop timer, mirroring how the app
    /// shell drives the phase state with `gloo_timers::callback::Timeout`.
    struct MockTimeout {
        fire_at: u32,
        action: Option<Box<dyn FnOnce()>>,
    }

    struct MockClock {
        now: u32,
        pending: Vec<MockTimeout>,
    }

    impl MockClock {
        fn new() -> Self {
            MockClock { now: 0, pending: Vec::new() }
        }

        fn schedule(&mut self, delay: u32, action: Box<dyn FnOnce()>) {
            self.pending.push(MockTimeout { fire_at: self.now + delay, action: Some(action) });
        }

        fn cancel_all(&mut self) {
            self.pending.clear();
        }

        fn advance_to(&mut self, t: u32) {
            self.now = t;
            let due: Vec<_> = {
                let now = self.now;
                let mut due = Vec::new();
                self.pending.retain_mut(|timer| {
                    if timer.fire_at <= now {
                        due.push(timer.action.take().unwrap());
                        false
                    } else {
                        true
                    }
                });
                due
            };
            for action in due {
                action();
            }
        }
    }

    fn drive(clock: &mut MockClock, phase: &Rc<RefCell<LoadPhase>>) {
        let current = *phase.borrow();
        if let Some(delay) = current.delay_to_next() {
            let phase = phase.clone();
            clock.schedule(
                delay,
                Box::new(move || {
                    *phase.borrow_mut() = current.next();
                }),
            );
        }
    }

    #[test]
    fn full_sequence_with_simulated_clock() {
        let phase = Rc::new(RefCell::new(LoadPhase::Loading));
        let mut clock = MockClock::new();

        drive(&mut clock, &phase);
        clock.advance_to(1_999);
        assert_eq!(*phase.borrow(), LoadPhase::Loading);

        clock.advance_to(2_000);
        assert_eq!(*phase.borrow(), LoadPhase::Transitioning);

        drive(&mut clock, &phase);
        clock.advance_to(2_299);
        assert_eq!(*phase.borrow(), LoadPhase::Transitioning);

        clock.advance_to(2_300);
        assert_eq!(*phase.borrow(), LoadPhase::Ready);

        // Terminal: nothing further to schedule.
        assert_eq!(phase.borrow().delay_to_next(), None);
    }

    #[test]
    fn teardown_cancels_pending_transition() {
        let phase = Rc::new(RefCell::new(LoadPhase::Loading));
        let mut clock = MockClock::new();

        drive(&mut clock, &phase);
        clock.advance_to(1_000);
        // Teardown at t=1000: the pending timer is dropped.
        clock.cancel_all();

        clock.advance_to(10_000);
        assert_eq!(*phase.borrow(), LoadPhase::Loading);
        assert!(clock.pending.is_empty());
    }
}
