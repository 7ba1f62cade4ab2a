use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use ready_app::log;
use ready_domain::StorageError;

use crate::{BlobStore, Key};

/// Blob store backed by the browser's local storage.
pub struct LocalStorage;

impl BlobStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map(|value| value.map(String::into_bytes))
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let value = std::str::from_utf8(value).map_err(|err| StorageError::Other(err.into()))?;
        gloo_storage::LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::delete(key);
        Ok(())
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(Key::Log.as_ref()) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        gloo_storage::LocalStorage::set(Key::Log.as_ref(), entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]
    mod wasm {
        use ::log::Level;
        use pretty_assertions::assert_eq;
        use ready_app::log::{Entry, MAX_ENTRIES, Repository};
        use ready_domain::{CustomRoutineRepository, ReadError};
        use wasm_bindgen_test::wasm_bindgen_test;

        use crate::key_value::KeyValueStorage;

        use super::*;

        #[wasm_bindgen_test]
        fn test_blob_store() {
            LocalStorage.remove("test").unwrap();
            assert_eq!(LocalStorage.get("test").unwrap(), None);

            LocalStorage.set("test", b"[1,2]").unwrap();
            assert_eq!(LocalStorage.get("test").unwrap(), Some(b"[1,2]".to_vec()));

            LocalStorage.remove("test").unwrap();
            assert_eq!(LocalStorage.get("test").unwrap(), None);
        }

        #[wasm_bindgen_test]
        fn test_custom_routines_missing() {
            LocalStorage.remove(Key::CustomRoutines.as_ref()).unwrap();
            assert!(matches!(
                KeyValueStorage::new(LocalStorage).read_custom_routines(),
                Err(ReadError::MissingData)
            ));
        }

        #[wasm_bindgen_test]
        fn test_log() {
            LocalStorage.remove(Key::Log.as_ref()).unwrap();
            assert!(Log.read_entries().unwrap().is_empty());

            for i in 0..=MAX_ENTRIES {
                Log.write_entry(Entry {
                    time: "May 01 09:00:00".to_string(),
                    level: Level::Info,
                    target: "ready".to_string(),
                    message: format!("entry {i}"),
                })
                .unwrap();
            }

            let entries = Log.read_entries().unwrap();
            assert_eq!(entries.len(), MAX_ENTRIES);
            assert_eq!(
                entries.front().map(|e| e.message.clone()),
                Some(format!("entry {MAX_ENTRIES}"))
            );
        }
    }
}
