use std::collections::VecDeque;

use ::log::error;

use crate::{OnboardingRepository, OnboardingService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: OnboardingRepository> OnboardingService for Service<R> {
    fn get_show_onboarding(&self) -> bool {
        self.repository.read_show_onboarding().unwrap_or_else(|err| {
            error!("failed to get onboarding flag: {err}");
            true
        })
    }

    fn set_show_onboarding(&self, show_onboarding: bool) -> Result<(), String> {
        self.repository
            .write_show_onboarding(show_onboarding)
            .inspect_err(|err| error!("failed to set onboarding flag: {err}"))
    }
}
