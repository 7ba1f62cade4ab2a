pub trait OnboardingService {
    /// Whether the onboarding pages should be shown on launch.
    fn get_show_onboarding(&self) -> bool;
    fn set_show_onboarding(&self, show_onboarding: bool) -> Result<(), String>;
}

/// Persists the onboarding flag. A missing flag reads as `true`.
pub trait OnboardingRepository {
    fn read_show_onboarding(&self) -> Result<bool, String>;
    fn write_show_onboarding(&self, show_onboarding: bool) -> Result<(), String>;
}
