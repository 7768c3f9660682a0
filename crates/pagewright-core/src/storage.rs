//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for About records. The
//! database handle is shared behind a lock so the engine, UI tasks, and CLI
//! paths all reuse one open file.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::Database;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::schema::{CollectionSchema, SchemaRegistry};

// Submodules
mod about;

use about::ABOUT_TABLE;

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
    schemas: Arc<SchemaRegistry>,
}

impl Storage {
    /// Get a reference to the shared database handle
    pub fn db_handle(&self) -> Arc<RwLock<Database>> {
        self.db.clone()
    }

    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    ///
    /// Field constraints are enforced at write time against the schemas in
    /// `schemas`; collections without a registered schema reject writes.
    pub fn new(path: impl AsRef<Path>, schemas: Arc<SchemaRegistry>) -> CoreResult<Self> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        // Initialize all tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ABOUT_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            schemas,
        })
    }

    /// Look up the registered schema for a collection
    pub fn schema(&self, collection: &str) -> Option<Arc<CollectionSchema>> {
        self.schemas.get(collection)
    }

    /// Validate a draft against the collection's registered schema.
    ///
    /// The draft is checked as a JSON document so the schema layer stays
    /// independent of any one record type.
    pub(crate) fn validate_draft<T: Serialize>(
        &self,
        collection: &str,
        draft: &T,
    ) -> CoreResult<()> {
        let schema = self.schemas.get(collection).ok_or_else(|| {
            CoreError::Serialization(format!("no schema registered for collection {collection}"))
        })?;
        let doc = serde_json::to_value(draft)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        schema.validate_value(&doc)
    }
}
