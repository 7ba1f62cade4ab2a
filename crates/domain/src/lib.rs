#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod clock;
mod custom_routine;
mod error;
mod name;
mod session;
mod stats;
mod workout;

pub use clock::{Clock, SystemClock};
pub use custom_routine::{
    CustomRoutine, CustomRoutineID, CustomRoutineRepository, CustomRoutines, DEFAULT_DURATION,
};
pub use error::{DeleteError, ReadError, StorageError, UpdateError, WriteError};
pub use name::{Name, NameError};
pub use session::{Progress, Session, SessionError, Status, Step};
pub use stats::{StatsRepository, StatsStore, WorkoutStats};
pub use workout::Workout;
