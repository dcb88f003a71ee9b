use std::time::Duration;

/// A pending timer in the single scheduler slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Timer {
    delay: Duration,
    elapsed: Duration,
    /// A spent timer stays in the slot until it is rescheduled or cancelled
    armed: bool,
}

/// Scheduler owns the one repeating game-loop timer.
///
/// The slot is either empty (no loop held, i.e. paused) or holds a timer.
/// A held timer fires once when its delay has elapsed and must be
/// rescheduled to fire again. Time is fed in from the frame loop, so the
/// scheduler never blocks and can be driven deterministically in tests.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    slot: Option<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Cancel whatever is pending and start a fresh timer
    pub fn start(&mut self, delay: Duration) {
        self.slot = Some(Timer {
            delay,
            elapsed: Duration::ZERO,
            armed: true,
        });
    }

    /// Drop the held timer; nothing fires until `start` is called again
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    /// Re-arm the held timer with a new delay. No-op when nothing is held.
    pub fn reschedule(&mut self, delay: Duration) {
        if let Some(timer) = self.slot.as_mut() {
            *timer = Timer {
                delay,
                elapsed: Duration::ZERO,
                armed: true,
            };
        }
    }

    /// Whether a loop handle is held (armed or spent)
    pub fn is_held(&self) -> bool {
        self.slot.is_some()
    }

    /// Whether a tick is still due
    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.slot.is_some_and(|timer| timer.armed)
    }

    /// Let `dt` pass. Returns true when the pending timer fires;
    /// the timer is then spent until rescheduled.
    pub fn poll(&mut self, dt: Duration) -> bool {
        let Some(timer) = self.slot.as_mut() else {
            return false;
        };
        if !timer.armed {
            return false;
        }
        timer.elapsed += dt;
        if timer.elapsed >= timer.delay {
            timer.armed = false;
            return true;
        }
        false
    }
}
