#![warn(clippy::pedantic)]

mod active_session;
pub mod log;
mod onboarding;
pub mod service;
mod ticker;

pub use active_session::{ActiveSession, Completion, RoutineKind};
pub use onboarding::{OnboardingRepository, OnboardingService};
pub use ticker::Ticker;

/// Format a number of seconds as `MM:SS`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
