//! Owned one-shot timer handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages keep one `TimerSlot` per delayed action (banner auto-clear, follow-up
//! snippet fetch) in a local `StoredValue`. Arming a slot drops the previous
//! `gloo_timers` handle, which cancels it; page cleanup cancels every slot so
//! no callback writes state after unmount.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

#[derive(Default)]
pub struct TimerSlot {
    /// Delay of the pending callback, recorded for native tests where no
    /// browser timer exists.
    #[cfg(test)]
    armed: Option<Duration>,
    #[cfg(feature = "hydrate")]
    handle: Option<gloo_timers::callback::Timeout>,
}

impl TimerSlot {
    /// Run `callback` once after `delay`, superseding any pending callback.
    pub fn arm<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        #[cfg(test)]
        {
            self.armed = Some(delay);
        }
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            self.handle = Some(gloo_timers::callback::Timeout::new(millis, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (delay, callback);
    }

    /// Drop the pending callback, if any, without running it.
    pub fn cancel(&mut self) {
        #[cfg(test)]
        {
            self.armed = None;
        }
        #[cfg(feature = "hydrate")]
        {
            self.handle = None;
        }
    }

    #[cfg(test)]
    fn armed_delay(&self) -> Option<Duration> {
        self.armed
    }
}
