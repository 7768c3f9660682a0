//! Content engine - the facade the UI and CLI consume.
//!
//! Owns the schema registry, the record store, and the upload client, and
//! re-exposes their operations as one handle.

use std::path::Path;
use std::sync::Arc;

use crate::error::CoreResult;
use crate::schema::SchemaRegistry;
use crate::storage::Storage;
use crate::types::{AboutDraft, AboutRecord};
use crate::upload::UploadClient;

/// Facade over storage, schemas, and the upload endpoint client
#[derive(Clone)]
pub struct ContentEngine {
    storage: Storage,
    schemas: Arc<SchemaRegistry>,
    uploader: UploadClient,
}

impl ContentEngine {
    /// Open (or create) the engine's database under `data_dir` and point the
    /// upload client at `upload_base_url`.
    ///
    /// Installs the About schema through the registry's lookup-or-create
    /// operation, so constructing several engines in one process never
    /// redefines a collection.
    pub fn new(data_dir: impl AsRef<Path>, upload_base_url: &str) -> CoreResult<Self> {
        let schemas = Arc::new(SchemaRegistry::new());
        schemas.lookup_or_create(AboutRecord::COLLECTION, AboutRecord::schema);

        let db_path = data_dir.as_ref().join("pagewright.redb");
        let storage = Storage::new(db_path, schemas.clone())?;

        tracing::info!(data_dir = %data_dir.as_ref().display(), "content engine ready");

        Ok(Self {
            storage,
            schemas,
            uploader: UploadClient::new(upload_base_url),
        })
    }

    /// The engine's schema registry
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Direct access to the storage layer
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // ═══════════════════════════════════════════════════════════════════════
    // About Record Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an About record from a draft
    pub fn create_about(&self, draft: &AboutDraft) -> CoreResult<AboutRecord> {
        let record = self.storage.create_about(draft)?;
        tracing::debug!(id = %record.id, "created About record");
        Ok(record)
    }

    /// Load an About record by id
    pub fn get_about(&self, id: &str) -> CoreResult<Option<AboutRecord>> {
        self.storage.get_about(id)
    }

    /// Update an About record's editable fields
    pub fn update_about(&self, id: &str, draft: &AboutDraft) -> CoreResult<AboutRecord> {
        let record = self.storage.update_about(id, draft)?;
        tracing::debug!(id = %record.id, "updated About record");
        Ok(record)
    }

    /// Delete an About record (no-op for unknown ids)
    pub fn delete_about(&self, id: &str) -> CoreResult<()> {
        self.storage.delete_about(id)
    }

    /// List all About records, newest first
    pub fn list_about(&self) -> CoreResult<Vec<AboutRecord>> {
        self.storage.list_about()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Image Upload
    // ═══════════════════════════════════════════════════════════════════════

    /// Push raw image bytes to the upload endpoint; returns the stored URL.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> CoreResult<String> {
        let size = bytes.len();
        let url = self.uploader.upload(file_name, bytes).await?;
        tracing::info!(file_name, size, %url, "image uploaded");
        Ok(url)
    }
}
