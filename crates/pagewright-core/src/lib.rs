//! Pagewright Core Library
//!
//! Local-first content management for a site's "About" page: a declarative
//! collection schema with an explicit registry, a redb-backed record store,
//! and a multipart upload client for the site's image endpoint.
//!
//! ## Overview
//!
//! The desktop UI and the CLI both talk to [`ContentEngine`], which owns the
//! three pieces and keeps them consistent:
//!
//! - schemas are installed once per process via [`SchemaRegistry`]
//! - record writes are validated against the registered schema, with
//!   `created_at`/`updated_at` managed by the store
//! - image files go up as a single multipart POST and come back as a URL
//!   that callers stash in a record's `image` field
//!
//! ## Quick Start
//!
//! ```ignore
//! use pagewright_core::{AboutDraft, ContentEngine};
//!
//! let engine = ContentEngine::new("~/.local/share/pagewright", "http://localhost:3000")?;
//!
//! let record = engine.create_about(&AboutDraft::new("Our Story", "We started in a garage."))?;
//!
//! for about in engine.list_about()? {
//!     println!("{} {}", if about.is_active { "●" } else { "○" }, about.title);
//! }
//! # Ok::<(), pagewright_core::CoreError>(())
//! ```

pub mod engine;
pub mod error;
pub mod schema;
pub mod storage;
pub mod types;
pub mod upload;

// Re-exports
pub use engine::ContentEngine;
pub use error::{CoreError, CoreResult};
pub use schema::{CollectionSchema, FieldKind, FieldSpec, SchemaRegistry};
pub use storage::Storage;
pub use types::{AboutDraft, AboutRecord};
pub use upload::{UploadClient, UploadResponse};
