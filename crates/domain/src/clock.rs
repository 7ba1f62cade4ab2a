use chrono::{DateTime, Local, TimeZone};

/// Source of the current time.
///
/// Calendar days are determined in the time zone of the clock, including its daylight saving
/// rules.
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
