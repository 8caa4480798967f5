//! The fixed wait between powering the adapter off and on.

use std::time::Duration;

/// Default time given to the radio to fully power down.
pub const DEFAULT_POWER_CYCLE_DELAY: Duration = Duration::from_secs(3);

/// Blocks the current thread for a duration.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

impl<P: Pause + ?Sized> Pause for &P {
    fn pause(&self, duration: Duration) {
        (**self).pause(duration)
    }
}

impl<P: Pause + ?Sized> Pause for Box<P> {
    fn pause(&self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// Real sleep on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately. Used by dry-run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&self, _duration: Duration) {}
}
