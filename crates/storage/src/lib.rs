#![warn(clippy::pedantic)]

use ready_domain::StorageError;
use strum::AsRefStr;

pub mod key_value;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
mod record;

/// Opaque key-value persistence.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "workout_stats")]
    WorkoutStats,
    #[strum(serialize = "customRoutines")]
    CustomRoutines,
    #[strum(serialize = "showOnboarding")]
    ShowOnboarding,
    #[strum(serialize = "log")]
    Log,
}
