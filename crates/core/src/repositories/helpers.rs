//! Filesystem utilities for the record store.

use crate::constants::{MAX_ID_ATTEMPTS, RECORD_JSON_FILENAME};
use crate::{RecordId, StoreError, StoreResult};
use serde_json::Value;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Claims a directory for a new record in `collection_dir`.
///
/// Ids are drawn from `next_id` until one maps to a shard leaf nobody holds yet. The leaf is
/// created with `create_dir`, so two writers can never claim the same id. Gives up after
/// [`MAX_ID_ATTEMPTS`] collisions.
pub(crate) fn create_unique_sharded_dir(
    collection_dir: &Path,
    mut next_id: impl FnMut() -> RecordId,
) -> StoreResult<(RecordId, PathBuf)> {
    for id in std::iter::repeat_with(&mut next_id).take(MAX_ID_ATTEMPTS) {
        let record_dir = id.sharded_dir(collection_dir);
        let shard = record_dir.parent().unwrap_or(collection_dir);
        fs::create_dir_all(shard).map_err(StoreError::RecordDirCreation)?;

        match fs::create_dir(&record_dir) {
            Ok(()) => return Ok((id, record_dir)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!("record id {} already taken in {}", id, collection_dir.display());
            }
            Err(e) => return Err(StoreError::RecordDirCreation(e)),
        }
    }

    Err(StoreError::IdsExhausted {
        collection_dir: collection_dir.to_path_buf(),
        attempts: MAX_ID_ATTEMPTS,
    })
}

pub(crate) fn write_record(record_dir: &Path, document: &Value) -> StoreResult<()> {
    let contents = serde_json::to_string_pretty(document).map_err(StoreError::Serialization)?;
    fs::write(record_dir.join(RECORD_JSON_FILENAME), contents).map_err(StoreError::FileWrite)
}

/// Reads the record stored in `record_dir`, or `None` if there is none.
pub(crate) fn read_record(record_dir: &Path) -> StoreResult<Option<Value>> {
    let path = record_dir.join(RECORD_JSON_FILENAME);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::FileRead(e)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(StoreError::Deserialization)
}

/// Lists every record directory under the sharded tree at `base_dir`.
///
/// Expects `<base_dir>/<s1>/<s2>/<id>/`. Entries that are not directories or whose leaf name is
/// not a canonical id are ignored. A missing `base_dir` yields an empty list.
pub(crate) fn list_record_dirs(base_dir: &Path) -> Vec<(RecordId, PathBuf)> {
    let mut found = Vec::new();

    let Ok(s1_iter) = fs::read_dir(base_dir) else {
        return found;
    };
    for s1 in s1_iter.flatten() {
        let Ok(s2_iter) = fs::read_dir(s1.path()) else {
            continue;
        };
        for s2 in s2_iter.flatten() {
            let Ok(id_iter) = fs::read_dir(s2.path()) else {
                continue;
            };
            for id_ent in id_iter.flatten() {
                let id_path = id_ent.path();
                if !id_path.is_dir() {
                    continue;
                }
                let parsed = id_path
                    .file_name()
                    .and_then(|os| os.to_str())
                    .and_then(|name| RecordId::parse(name).ok());
                if let Some(id) = parsed {
                    found.push((id, id_path));
                }
            }
        }
    }

    found.sort_by_key(|(id, _)| id.to_string());
    found
}
