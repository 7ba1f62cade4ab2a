use chrono::{DateTime, TimeZone, Utc};
use log::{debug, error};

use crate::{Clock, DeleteError, ReadError, WriteError, Workout};

pub trait StatsRepository {
    fn read_stats(&self) -> Result<WorkoutStats, ReadError>;
    fn write_stats(&self, stats: &WorkoutStats) -> Result<(), WriteError>;
    fn delete_stats(&self) -> Result<(), DeleteError>;
}

/// Aggregate usage counters.
///
/// Times are accumulated in seconds.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutStats {
    pub pre_workout_quick_count: u32,
    pub pre_workout_full_count: u32,
    pub post_workout_quick_count: u32,
    pub post_workout_full_count: u32,
    pub custom_routines_completed: u32,
    pub total_workouts_completed: u32,
    pub total_workout_time: f64,
    pub total_custom_routine_time: f64,
    pub current_streak: u32,
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl WorkoutStats {
    /// Count a completed built-in workout and add its nominal duration.
    pub fn record_workout_completion<Tz: TimeZone>(&mut self, workout: Workout, now: &DateTime<Tz>) {
        match workout {
            Workout::PreWorkoutQuick => self.pre_workout_quick_count += 1,
            Workout::PreWorkoutFull => self.pre_workout_full_count += 1,
            Workout::PostWorkoutQuick => self.post_workout_quick_count += 1,
            Workout::PostWorkoutFull => self.post_workout_full_count += 1,
        }
        self.total_workouts_completed += 1;
        self.total_workout_time += f64::from(workout.total_duration());
        self.update_streak(now);
    }

    /// Count a completed custom routine and add the time actually spent on it.
    pub fn record_custom_routine_completion<Tz: TimeZone>(
        &mut self,
        actual_elapsed_seconds: u32,
        now: &DateTime<Tz>,
    ) {
        self.custom_routines_completed += 1;
        self.total_custom_routine_time += f64::from(actual_elapsed_seconds);
        self.update_streak(now);
    }

    /// Both days are taken in the time zone of `now`.
    fn update_streak<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let today = now.date_naive();

        if let Some(last_workout_date) = self.last_workout_date {
            let last_workout_day = last_workout_date.with_timezone(&now.timezone()).date_naive();
            match (today - last_workout_day).num_days() {
                0 => return,
                1 => self.current_streak += 1,
                _ => self.current_streak = 1,
            }
        } else {
            self.current_streak = 1;
        }

        self.last_workout_date = Some(now.with_timezone(&Utc));
    }

    #[must_use]
    pub fn total_completed(&self) -> u32 {
        self.total_workouts_completed + self.custom_routines_completed
    }

    #[must_use]
    pub fn workout_minutes(&self) -> u32 {
        whole(self.total_workout_time / 60.0)
    }

    #[must_use]
    pub fn custom_routine_minutes(&self) -> u32 {
        whole(self.total_custom_routine_time / 60.0)
    }

    #[must_use]
    pub fn custom_routine_hours(&self) -> u32 {
        whole(self.total_custom_routine_time / 3600.0)
    }

    #[must_use]
    pub fn total_hours(&self) -> u32 {
        whole((self.total_workout_time + self.total_custom_routine_time) / 3600.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    value.max(0.0).trunc() as u32
}

/// Persisted [`WorkoutStats`], saved after every change.
///
/// Persistence failures never reach the caller. They are logged and the store carries on with
/// its in-memory state.
pub struct StatsStore<R, C> {
    repository: R,
    clock: C,
    stats: WorkoutStats,
}

impl<R: StatsRepository, C: Clock> StatsStore<R, C> {
    pub fn new(repository: R, clock: C) -> Self {
        let mut store = Self {
            repository,
            clock,
            stats: WorkoutStats::default(),
        };
        store.load();
        store
    }

    #[must_use]
    pub fn stats(&self) -> &WorkoutStats {
        &self.stats
    }

    pub fn load(&mut self) {
        self.stats = match self.repository.read_stats() {
            Ok(stats) => stats,
            Err(ReadError::MissingData) => {
                debug!("no workout stats stored");
                WorkoutStats::default()
            }
            Err(err) => {
                error!("failed to load workout stats: {err}");
                WorkoutStats::default()
            }
        };
    }

    pub fn record_workout_completion(&mut self, workout: Workout) {
        let now = self.clock.now();
        self.stats.record_workout_completion(workout, &now);
        self.save();
    }

    pub fn record_custom_routine_completion(&mut self, actual_elapsed_seconds: u32) {
        let now = self.clock.now();
        self.stats
            .record_custom_routine_completion(actual_elapsed_seconds, &now);
        self.save();
    }

    pub fn delete_all(&mut self) {
        self.stats = WorkoutStats::default();
        if let Err(err) = self.repository.delete_stats() {
            error!("failed to delete workout stats: {err}");
        }
    }

    fn save(&self) {
        if let Err(err) = self.repository.write_stats(&self.stats) {
            error!("failed to save workout stats: {err}");
        }
    }
}
