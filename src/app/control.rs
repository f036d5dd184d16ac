use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
}

/// Combines the play/pause state with fixed-interval tick scheduling.
/// The game starts paused.
pub struct Control {
    tick_interval: Duration,
    last_tick: Instant,
    state: State,
}

impl Control {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_tick: Instant::now(),
            state: State::Paused,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            State::Playing => State::Paused,
            State::Paused => {
                // restart the clock so resuming doesn't fire a burst
                // of catch-up ticks for the time spent paused
                self.last_tick = Instant::now();
                State::Playing
            }
        };
    }

    /// At most one tick is due per call, the next one is only
    /// scheduled once the current tick's work has completed
    pub fn tick_due(&mut self) -> bool {
        if self.state != State::Playing {
            return false;
        }
        if self.last_tick.elapsed() >= self.tick_interval {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_paused() {
        let mut control = Control::new(Duration::from_millis(80));
        assert_eq!(control.state(), State::Paused);
        assert!(!control.tick_due());
    }

    #[test]
    fn test_pause_toggle_idempotent() {
        // interval long enough that no tick can elapse during the test
        let mut control = Control::new(Duration::from_secs(1000));

        control.toggle();
        control.toggle();
        assert_eq!(control.state(), State::Paused);
        assert!(!control.tick_due());

        control.toggle();
        assert_eq!(control.state(), State::Playing);
        control.toggle();
        control.toggle();
        assert_eq!(control.state(), State::Playing);
        assert!(!control.tick_due());
    }

    #[test]
    fn test_tick_fires_after_interval() {
        let mut control = Control::new(Duration::ZERO);
        assert!(!control.tick_due(), "no tick while paused");
        control.toggle();
        assert!(control.tick_due());
    }
}
