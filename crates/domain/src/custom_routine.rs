use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use log::{debug, error};
use uuid::Uuid;

use crate::{Clock, Name, ReadError, Session, SessionError, Step, UpdateError, WriteError};

pub const DEFAULT_DURATION: u32 = 30;

pub trait CustomRoutineRepository {
    fn read_custom_routines(&self) -> Result<Vec<CustomRoutine>, ReadError>;
    fn write_custom_routines(&self, routines: &[CustomRoutine]) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomRoutine {
    pub id: CustomRoutineID,
    pub name: Name,
    pub instructions: String,
    /// Duration in seconds.
    pub duration: u32,
    pub image: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

impl CustomRoutine {
    /// A routine with default duration, created at the current time of `clock`.
    #[must_use]
    pub fn new<C: Clock>(name: Name, clock: &C) -> Self {
        Self {
            id: CustomRoutineID::random(),
            name,
            instructions: String::new(),
            duration: DEFAULT_DURATION,
            image: None,
            created_at: clock.now().with_timezone(&Utc),
        }
    }

    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.duration / 60
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.duration % 60
    }

    pub fn set_duration(&mut self, minutes: u32, seconds: u32) {
        self.duration = minutes.saturating_mul(60).saturating_add(seconds);
    }

    /// A session consisting of a single step built from this routine.
    pub fn session(&self) -> Result<Session, SessionError> {
        Session::new(vec![Step {
            name: self.name.to_string(),
            instructions: self.instructions.clone(),
            duration: self.duration,
            image: None,
        }])
    }
}

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CustomRoutineID(Uuid);

impl CustomRoutineID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for CustomRoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for CustomRoutineID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// The user's custom routines in creation order, saved after every change.
pub struct CustomRoutines<R> {
    repository: R,
    routines: Vec<CustomRoutine>,
}

impl<R: CustomRoutineRepository> CustomRoutines<R> {
    pub fn new(repository: R) -> Self {
        let mut custom_routines = Self {
            repository,
            routines: vec![],
        };
        custom_routines.load();
        custom_routines
    }

    #[must_use]
    pub fn routines(&self) -> &[CustomRoutine] {
        &self.routines
    }

    #[must_use]
    pub fn get(&self, id: CustomRoutineID) -> Option<&CustomRoutine> {
        self.routines.iter().find(|r| r.id == id)
    }

    pub fn load(&mut self) {
        self.routines = match self.repository.read_custom_routines() {
            Ok(routines) => routines,
            Err(ReadError::MissingData) => {
                debug!("no custom routines stored");
                vec![]
            }
            Err(err) => {
                error!("failed to load custom routines: {err}");
                vec![]
            }
        };
    }

    pub fn add(&mut self, routine: CustomRoutine) {
        self.routines.push(routine);
        self.save();
    }

    /// Replace the routine with the same ID.
    pub fn update(&mut self, routine: CustomRoutine) -> Result<(), UpdateError> {
        let Some(existing) = self.routines.iter_mut().find(|r| r.id == routine.id) else {
            return Err(UpdateError::NotFound(routine.id));
        };
        *existing = routine;
        self.save();
        Ok(())
    }

    pub fn delete(&mut self, id: CustomRoutineID) {
        self.routines.retain(|r| r.id != id);
        self.save();
    }

    /// Remove the routines at the given positions. Positions out of range are ignored.
    pub fn delete_at(&mut self, offsets: &[usize]) {
        let mut offset = 0;
        self.routines.retain(|_| {
            let keep = !offsets.contains(&offset);
            offset += 1;
            keep
        });
        self.save();
    }

    fn save(&self) {
        if let Err(err) = self.repository.write_custom_routines(&self.routines) {
            error!("failed to save custom routines: {err}");
        }
    }
}
