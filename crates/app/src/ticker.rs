use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Interval;

use crate::{ActiveSession, Completion};

const TICK_INTERVAL_MS: u32 = 1_000;

/// Handle of a callback scheduled once per second.
///
/// The callback stops firing when the handle is cancelled or dropped.
pub struct Ticker {
    interval: Option<Interval>,
}

impl Ticker {
    pub fn every_second(callback: impl FnMut() + 'static) -> Self {
        Self {
            interval: Some(Interval::new(TICK_INTERVAL_MS, callback)),
        }
    }

    /// Tick `session` every second and pass completions on to `on_completion`.
    pub fn drive(
        session: Rc<RefCell<ActiveSession>>,
        mut on_completion: impl FnMut(Completion) + 'static,
    ) -> Self {
        Self::every_second(move || {
            let completion = session.borrow_mut().tick();
            if let Some(completion) = completion {
                on_completion(completion);
            }
        })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }
}
