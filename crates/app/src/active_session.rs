use ready_domain::{
    Clock, CustomRoutine, Progress, Session, SessionError, StatsRepository, StatsStore, Workout,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RoutineKind {
    Workout(Workout),
    Custom(CustomRoutine),
}

/// A unit of completed exercise that has to be counted in the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Workout(Workout),
    CustomRoutine { elapsed: u32 },
}

impl Completion {
    pub fn record<R: StatsRepository, C: Clock>(self, stats: &mut StatsStore<R, C>) {
        match self {
            Completion::Workout(workout) => stats.record_workout_completion(workout),
            Completion::CustomRoutine { elapsed } => {
                stats.record_custom_routine_completion(elapsed);
            }
        }
    }
}

/// The session currently shown to the user.
///
/// Built-in workouts count one completion for every step that is left for a following step.
/// Reaching the end of the last step finishes the session without another count. Custom
/// routines count once, when the session finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    kind: RoutineKind,
    session: Session,
}

impl ActiveSession {
    pub fn workout(workout: Workout) -> Result<Self, SessionError> {
        Ok(Self {
            kind: RoutineKind::Workout(workout),
            session: workout.session()?,
        })
    }

    pub fn custom_routine(routine: CustomRoutine) -> Result<Self, SessionError> {
        Ok(Self {
            session: routine.session()?,
            kind: RoutineKind::Custom(routine),
        })
    }

    #[must_use]
    pub fn kind(&self) -> &RoutineKind {
        &self.kind
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn toggle(&mut self) {
        self.session.toggle();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn tick(&mut self) -> Option<Completion> {
        let progress = self.session.tick()?;
        self.completion(progress)
    }

    pub fn advance(&mut self) -> Option<Completion> {
        let progress = self.session.advance()?;
        self.completion(progress)
    }

    fn completion(&self, progress: Progress) -> Option<Completion> {
        match (&self.kind, progress) {
            (RoutineKind::Workout(workout), Progress::Step(_)) => {
                Some(Completion::Workout(*workout))
            }
            (RoutineKind::Custom(routine), Progress::Finished) => {
                let elapsed = self.session.elapsed();
                Some(Completion::CustomRoutine {
                    elapsed: if elapsed > 0 {
                        elapsed
                    } else {
                        routine.duration
                    },
                })
            }
            (RoutineKind::Workout(_), Progress::Finished)
            | (RoutineKind::Custom(_), Progress::Step(_)) => None,
        }
    }
}
