use chrono::{DateTime, Utc};
use ready_domain as domain;
use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl From<&domain::WorkoutStats> for WorkoutStats {
    fn from(value: &domain::WorkoutStats) -> Self {
        Self {
            pre_workout_quick_count: value.pre_workout_quick_count,
            pre_workout_full_count: value.pre_workout_full_count,
            post_workout_quick_count: value.post_workout_quick_count,
            post_workout_full_count: value.post_workout_full_count,
            custom_routines_completed: value.custom_routines_completed,
            total_workouts_completed: value.total_workouts_completed,
            total_workout_time: value.total_workout_time,
            total_custom_routine_time: value.total_custom_routine_time,
            current_streak: value.current_streak,
            last_workout_date: value.last_workout_date,
        }
    }
}

impl From<WorkoutStats> for domain::WorkoutStats {
    fn from(value: WorkoutStats) -> Self {
        Self {
            pre_workout_quick_count: value.pre_workout_quick_count,
            pre_workout_full_count: value.pre_workout_full_count,
            post_workout_quick_count: value.post_workout_quick_count,
            post_workout_full_count: value.post_workout_full_count,
            custom_routines_completed: value.custom_routines_completed,
            total_workouts_completed: value.total_workouts_completed,
            total_workout_time: value.total_workout_time,
            total_custom_routine_time: value.total_custom_routine_time,
            current_streak: value.current_streak,
            last_workout_date: value.last_workout_date,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomRoutine {
    pub id: Uuid,
    pub name: String,
    pub instructions: String,
    pub duration: i64,
    #[serde(default, with = "image_data", skip_serializing_if = "Option::is_none")]
    pub image_data: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::CustomRoutine> for CustomRoutine {
    fn from(value: &domain::CustomRoutine) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            instructions: value.instructions.clone(),
            duration: i64::from(value.duration),
            image_data: value.image.clone(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<CustomRoutine> for domain::CustomRoutine {
    type Error = domain::NameError;

    fn try_from(value: CustomRoutine) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            instructions: value.instructions,
            duration: u32::try_from(value.duration.max(0)).unwrap_or(u32::MAX),
            image: value.image_data,
            created_at: value.created_at,
        })
    }
}

/// Image bytes embedded as standard base64.
mod image_data {
    use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&BASE64.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| BASE64.decode(encoded).map_err(D::Error::custom))
            .transpose()
    }
}
