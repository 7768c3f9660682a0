//! About Storage - CRUD operations for About records
//!
//! Stores records in redb keyed by their ULID. Drafts are validated against
//! the registered "About" schema before any write; timestamps are assigned
//! here and never taken from the caller.

use redb::{ReadableTable, TableDefinition};

use crate::error::{CoreError, CoreResult};
use crate::types::{AboutDraft, AboutRecord};

use super::Storage;

/// Table for About records (key: ULID string, value: serialized AboutRecord)
pub(crate) const ABOUT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("about");

impl Storage {
    /// Create a new About record from a draft.
    ///
    /// Assigns a fresh ULID and sets `created_at == updated_at`. Fails with
    /// [`CoreError::Validation`] if the draft violates the schema.
    pub fn create_about(&self, draft: &AboutDraft) -> CoreResult<AboutRecord> {
        self.validate_draft(AboutRecord::COLLECTION, draft)?;
        let record = AboutRecord::from_draft(draft);

        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(ABOUT_TABLE)?;
            let serialized = postcard::to_allocvec(&record)
                .map_err(|e| CoreError::Serialization(e.to_string()))?;
            table.insert(record.id.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(record)
    }

    /// Load an About record by id.
    ///
    /// Returns `None` if no record exists under the given id.
    pub fn get_about(&self, id: &str) -> CoreResult<Option<AboutRecord>> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(ABOUT_TABLE)?;

        if let Some(data) = table.get(id)? {
            let record: AboutRecord = postcard::from_bytes(data.value())
                .map_err(|e| CoreError::Serialization(e.to_string()))?;
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    /// Replace the editable fields of an existing record.
    ///
    /// Preserves `id` and `created_at`, refreshes `updated_at`. Fails with
    /// [`CoreError::AboutNotFound`] if the id is unknown.
    pub fn update_about(&self, id: &str, draft: &AboutDraft) -> CoreResult<AboutRecord> {
        self.validate_draft(AboutRecord::COLLECTION, draft)?;

        let mut record = self
            .get_about(id)?
            .ok_or_else(|| CoreError::AboutNotFound(id.to_string()))?;
        record.apply(draft);

        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(ABOUT_TABLE)?;
            let serialized = postcard::to_allocvec(&record)
                .map_err(|e| CoreError::Serialization(e.to_string()))?;
            table.insert(record.id.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(record)
    }

    /// Delete an About record by id.
    ///
    /// Returns `Ok(())` even if the record doesn't exist.
    pub fn delete_about(&self, id: &str) -> CoreResult<()> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(ABOUT_TABLE)?;
            table.remove(id)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// List all About records, newest first.
    ///
    /// ULIDs sort lexicographically by creation time, so reverse key order
    /// gives newest-first without touching the payloads.
    pub fn list_about(&self) -> CoreResult<Vec<AboutRecord>> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(ABOUT_TABLE)?;

        let mut records = Vec::new();
        for entry in table.iter()?.rev() {
            let (_, value) = entry?;
            let record: AboutRecord = postcard::from_bytes(value.value())
                .map_err(|e| CoreError::Serialization(e.to_string()))?;
            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn open_storage(dir: &std::path::Path) -> Storage {
        let schemas = Arc::new(SchemaRegistry::new());
        schemas.lookup_or_create(AboutRecord::COLLECTION, AboutRecord::schema);
        Storage::new(dir.join("test.db"), schemas).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        let created = storage
            .create_about(&AboutDraft::new("Our Story", "We started in a garage."))
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let loaded = storage.get_about(&created.id).unwrap();
        assert_eq!(loaded, Some(created));
    }

    #[test]
    fn test_get_nonexistent() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        let loaded = storage.get_about("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        let err = storage.create_about(&AboutDraft::new("", "body")).unwrap_err();
        assert!(matches!(err, CoreError::Validation { field, .. } if field == "title"));

        let err = storage.create_about(&AboutDraft::new("title", "  ")).unwrap_err();
        assert!(matches!(err, CoreError::Validation { field, .. } if field == "content"));

        // Nothing was persisted
        assert!(storage.list_about().unwrap().is_empty());
    }

    #[test]
    fn test_update_preserves_created_at() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        let created = storage
            .create_about(&AboutDraft::new("Original", "body"))
            .unwrap();

        // Unix timestamps have 1-second granularity
        std::thread::sleep(std::time::Duration::from_millis(1001));

        let mut draft = AboutDraft::new("Updated", "new body");
        draft.image = Some("https://x/a.png".to_string());
        let updated = storage.update_about(&created.id, &draft).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.title, "Updated");

        let loaded = storage.get_about(&created.id).unwrap().unwrap();
        assert_eq!(loaded, updated);
    }

    #[test]
    fn test_update_unknown_id() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        let err = storage
            .update_about("missing", &AboutDraft::new("t", "c"))
            .unwrap_err();
        assert!(matches!(err, CoreError::AboutNotFound(_)));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        let created = storage.create_about(&AboutDraft::new("t", "c")).unwrap();
        storage.delete_about(&created.id).unwrap();
        assert!(storage.get_about(&created.id).unwrap().is_none());

        // Deleting again is still Ok
        storage.delete_about(&created.id).unwrap();
    }

    #[test]
    fn test_list_newest_first() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path());

        // ULID ordering is only guaranteed across distinct milliseconds
        let first = storage.create_about(&AboutDraft::new("first", "c")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = storage.create_about(&AboutDraft::new("second", "c")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let third = storage.create_about(&AboutDraft::new("third", "c")).unwrap();

        let ids: Vec<String> = storage
            .list_about()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        let id = {
            let storage = open_storage(temp_dir.path());
            storage
                .create_about(&AboutDraft::new("persisted", "body"))
                .unwrap()
                .id
        };

        let storage = open_storage(temp_dir.path());
        let loaded = storage.get_about(&id).unwrap().unwrap();
        assert_eq!(loaded.title, "persisted");
    }
}
