/// A single timed unit of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub instructions: String,
    /// Duration in seconds.
    pub duration: u32,
    pub image: Option<String>,
}

impl Step {
    /// Negative durations are clamped to zero.
    #[must_use]
    pub fn new(name: &str, instructions: &str, duration: i64, image: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            instructions: instructions.to_string(),
            duration: u32::try_from(duration.max(0)).unwrap_or(u32::MAX),
            image: image.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Reported whenever a session leaves its current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The step with the given index has begun.
    Step(usize),
    Finished,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("session must contain at least one step")]
    EmptySession,
}

/// Countdown state machine running through an ordered list of steps.
///
/// The owner is expected to call [`Session::tick`] once per second while the session is
/// running. Each step lasts exactly `duration` ticks, so an uninterrupted session with no
/// zero-length steps finishes after the sum of all step durations.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    steps: Vec<Step>,
    index: usize,
    time_remaining: u32,
    elapsed: u32,
    status: Status,
}

impl Session {
    pub fn new(steps: Vec<Step>) -> Result<Self, SessionError> {
        let Some(first) = steps.first() else {
            return Err(SessionError::EmptySession);
        };
        let time_remaining = first.duration;
        Ok(Self {
            steps,
            index: 0,
            time_remaining,
            elapsed: 0,
            status: Status::Idle,
        })
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn current_step(&self) -> &Step {
        &self.steps[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.index + 1 >= self.steps.len()
    }

    /// Sum of all step durations in seconds.
    #[must_use]
    pub fn total_duration(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.duration)).sum()
    }

    pub fn start(&mut self) {
        if matches!(self.status, Status::Idle | Status::Paused) {
            self.status = Status::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
    }

    pub fn toggle(&mut self) {
        if self.status == Status::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Ignored unless the session is running. Returns the progress made if the current step
    /// ran out.
    pub fn tick(&mut self) -> Option<Progress> {
        if self.status != Status::Running {
            return None;
        }

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            self.elapsed = self.elapsed.saturating_add(1);
        }

        if self.time_remaining == 0 {
            self.advance()
        } else {
            None
        }
    }

    /// Leave the current step, finishing the session after the last one.
    ///
    /// The status is kept when moving to the next step, so a paused session stays paused.
    pub fn advance(&mut self) -> Option<Progress> {
        if self.status == Status::Finished {
            return None;
        }

        if self.is_last_step() {
            self.status = Status::Finished;
            return Some(Progress::Finished);
        }

        self.index += 1;
        self.time_remaining = self.steps[self.index].duration;
        Some(Progress::Step(self.index))
    }

    /// Restore the timer of the current step and pause.
    ///
    /// The step index is kept. Use [`Session::restart`] to go back to the first step.
    pub fn reset(&mut self) {
        if self.status == Status::Finished {
            return;
        }
        self.status = Status::Paused;
        self.time_remaining = self.current_step().duration;
        self.elapsed = 0;
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.elapsed = 0;
        self.time_remaining = self.steps[0].duration;
        self.status = Status::Idle;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn session(durations: &[i64]) -> Session {
        Session::new(
            durations
                .iter()
                .enumerate()
                .map(|(i, d)| Step::new(&format!("Step {i}"), "", *d, None))
                .collect(),
        )
        .unwrap()
    }

    fn ticks(session: &mut Session, n: u32) -> Vec<Progress> {
        (0..n).filter_map(|_| session.tick()).collect()
    }

    #[rstest]
    #[case(45, 45)]
    #[case(0, 0)]
    #[case(-10, 0)]
    fn test_step_new_clamps_duration(#[case] duration: i64, #[case] expected: u32) {
        assert_eq!(Step::new("A", "B", duration, Some("e1")).duration, expected);
    }

    #[test]
    fn test_session_new_empty() {
        assert_eq!(Session::new(vec![]), Err(SessionError::EmptySession));
    }

    #[test]
    fn test_session_new() {
        let session = session(&[20, 10]);
        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.index(), 0);
        assert_eq!(session.time_remaining(), 20);
        assert_eq!(session.elapsed(), 0);
        assert_eq!(session.total_duration(), 30);
        assert_eq!(session.current_step().name, "Step 0");
    }

    #[test]
    fn test_session_total_duration_of_long_steps() {
        let session = session(&[i64::MAX, 1, i64::from(u32::MAX)]);
        assert_eq!(session.steps()[0].duration, u32::MAX);
        assert_eq!(session.total_duration(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_session_three_steps() {
        let mut session = session(&[60, 30, 30]);
        session.start();

        assert_eq!(ticks(&mut session, 60), vec![Progress::Step(1)]);
        assert_eq!(session.index(), 1);
        assert_eq!(session.time_remaining(), 30);
        assert_eq!(session.status(), Status::Running);

        assert_eq!(ticks(&mut session, 30), vec![Progress::Step(2)]);
        assert_eq!(session.index(), 2);
        assert_eq!(session.time_remaining(), 30);

        assert_eq!(ticks(&mut session, 30), vec![Progress::Finished]);
        assert_eq!(session.status(), Status::Finished);
        assert_eq!(session.elapsed(), 120);
    }

    #[rstest]
    #[case(&[5])]
    #[case(&[1, 2, 3])]
    #[case(&[0, 4, 0, 2])]
    fn test_session_advances_to_finish(#[case] durations: &[i64]) {
        let mut session = session(durations);
        session.start();

        let mut progress = vec![];
        while session.status() != Status::Finished {
            progress.extend(session.tick());
        }

        assert_eq!(progress.len(), durations.len());
        assert_eq!(progress.last(), Some(&Progress::Finished));
    }

    #[test]
    fn test_session_finished_is_terminal() {
        let mut session = session(&[1, 1]);
        session.start();
        session.advance();
        assert_eq!(session.advance(), Some(Progress::Finished));

        assert_eq!(session.tick(), None);
        assert_eq!(session.advance(), None);
        session.start();
        session.reset();
        assert_eq!(session.status(), Status::Finished);
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_session_zero_duration_step_completes_on_first_tick() {
        let mut session = session(&[0, 3]);
        session.start();
        assert_eq!(session.tick(), Some(Progress::Step(1)));
        assert_eq!(session.elapsed(), 0);
        assert_eq!(session.time_remaining(), 3);
    }

    #[test]
    fn test_session_tick_ignored_unless_running() {
        let mut session = session(&[3]);
        assert_eq!(session.tick(), None);
        assert_eq!(session.time_remaining(), 3);

        session.start();
        session.tick();
        session.pause();
        assert_eq!(session.status(), Status::Paused);
        assert_eq!(session.tick(), None);
        assert_eq!(session.time_remaining(), 2);
    }

    #[test]
    fn test_session_start_and_pause() {
        let mut session = session(&[3]);
        session.pause();
        assert_eq!(session.status(), Status::Idle);
        session.start();
        assert_eq!(session.status(), Status::Running);
        session.start();
        assert_eq!(session.status(), Status::Running);
        session.pause();
        assert_eq!(session.status(), Status::Paused);
        session.start();
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn test_session_toggle() {
        let mut session = session(&[3]);
        session.toggle();
        assert_eq!(session.status(), Status::Running);
        session.toggle();
        assert_eq!(session.status(), Status::Paused);
        session.toggle();
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn test_session_advance_keeps_status() {
        let mut session = session(&[10, 20]);
        assert_eq!(session.advance(), Some(Progress::Step(1)));
        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.time_remaining(), 20);
    }

    #[test]
    fn test_session_reset_keeps_step() {
        let mut session = session(&[2, 10]);
        session.start();
        ticks(&mut session, 2);
        ticks(&mut session, 4);
        assert_eq!(session.index(), 1);
        assert_eq!(session.time_remaining(), 6);

        session.reset();

        assert_eq!(session.index(), 1);
        assert_eq!(session.time_remaining(), 10);
        assert_eq!(session.elapsed(), 0);
        assert_eq!(session.status(), Status::Paused);
    }

    #[test]
    fn test_session_reset_then_ticks_matches_uninterrupted_run() {
        let mut uninterrupted = session(&[5, 5]);
        uninterrupted.start();
        let expected = ticks(&mut uninterrupted, 5);

        let mut interrupted = session(&[5, 5]);
        interrupted.start();
        ticks(&mut interrupted, 3);
        interrupted.reset();
        interrupted.start();
        let progress = ticks(&mut interrupted, 5);

        assert_eq!(progress, expected);
        assert_eq!(interrupted.index(), uninterrupted.index());
        assert_eq!(interrupted.time_remaining(), uninterrupted.time_remaining());
    }

    #[test]
    fn test_session_restart() {
        let mut session = session(&[1, 2]);
        session.start();
        ticks(&mut session, 3);
        assert_eq!(session.status(), Status::Finished);

        session.restart();

        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.index(), 0);
        assert_eq!(session.time_remaining(), 1);
        assert_eq!(session.elapsed(), 0);

        session.start();
        assert_eq!(session.tick(), Some(Progress::Step(1)));
    }
}
