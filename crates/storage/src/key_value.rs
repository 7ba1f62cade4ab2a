use ready_app::OnboardingRepository;
use ready_domain as domain;
use serde::{Serialize, de::DeserializeOwned};

use crate::{BlobStore, Key, record};

/// Stores every entity as one JSON document per key.
pub struct KeyValueStorage<B> {
    store: B,
}

impl<B: BlobStore> KeyValueStorage<B> {
    pub fn new(store: B) -> Self {
        Self { store }
    }

    fn read<T: DeserializeOwned>(&self, key: Key) -> Result<T, domain::ReadError> {
        let bytes = self
            .store
            .get(key.as_ref())?
            .ok_or(domain::ReadError::MissingData)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| domain::ReadError::DecodeFailure(err.to_string()))
    }

    fn write<T: Serialize>(&self, key: Key, value: &T) -> Result<(), domain::WriteError> {
        let bytes = serde_json::to_vec(value)
            .map_err(|err| domain::WriteError::EncodeFailure(err.to_string()))?;
        Ok(self.store.set(key.as_ref(), &bytes)?)
    }
}

impl<B: BlobStore> domain::StatsRepository for KeyValueStorage<B> {
    fn read_stats(&self) -> Result<domain::WorkoutStats, domain::ReadError> {
        self.read::<record::WorkoutStats>(Key::WorkoutStats)
            .map(domain::WorkoutStats::from)
    }

    fn write_stats(&self, stats: &domain::WorkoutStats) -> Result<(), domain::WriteError> {
        self.write(Key::WorkoutStats, &record::WorkoutStats::from(stats))
    }

    fn delete_stats(&self) -> Result<(), domain::DeleteError> {
        Ok(self.store.remove(Key::WorkoutStats.as_ref())?)
    }
}

impl<B: BlobStore> domain::CustomRoutineRepository for KeyValueStorage<B> {
    fn read_custom_routines(&self) -> Result<Vec<domain::CustomRoutine>, domain::ReadError> {
        self.read::<Vec<record::CustomRoutine>>(Key::CustomRoutines)?
            .into_iter()
            .map(domain::CustomRoutine::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| domain::ReadError::DecodeFailure(err.to_string()))
    }

    fn write_custom_routines(
        &self,
        routines: &[domain::CustomRoutine],
    ) -> Result<(), domain::WriteError> {
        self.write(
            Key::CustomRoutines,
            &routines
                .iter()
                .map(record::CustomRoutine::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl<B: BlobStore> OnboardingRepository for KeyValueStorage<B> {
    fn read_show_onboarding(&self) -> Result<bool, String> {
        match self.read::<bool>(Key::ShowOnboarding) {
            Ok(show_onboarding) => Ok(show_onboarding),
            Err(domain::ReadError::MissingData) => Ok(true),
            Err(err) => Err(err.to_string()),
        }
    }

    fn write_show_onboarding(&self, show_onboarding: bool) -> Result<(), String> {
        self.write(Key::ShowOnboarding, &show_onboarding)
            .map_err(|err| err.to_string())
    }
}
