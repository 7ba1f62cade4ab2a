use crate::CustomRoutineID;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("no data")]
    MissingData,
    #[error("failed to decode data: {0}")]
    DecodeFailure(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("failed to encode data: {0}")]
    EncodeFailure(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UpdateError {
    #[error("custom routine {0} not found")]
    NotFound(CustomRoutineID),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_from_storage_error() {
        assert!(matches!(
            WriteError::from(StorageError::Unavailable),
            WriteError::Storage(StorageError::Unavailable)
        ));
        assert!(matches!(
            DeleteError::from(StorageError::Other("foo".into())),
            DeleteError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(ReadError::MissingData.to_string(), "no data");
        assert_eq!(
            ReadError::DecodeFailure("expected value".to_string()).to_string(),
            "failed to decode data: expected value"
        );
        assert_eq!(
            ReadError::from(StorageError::Unavailable).to_string(),
            "storage unavailable"
        );
    }

    #[test]
    fn test_update_error_display() {
        assert_eq!(
            UpdateError::NotFound(CustomRoutineID::from(1)).to_string(),
            "custom routine 00000000-0000-0000-0000-000000000001 not found"
        );
    }
}
