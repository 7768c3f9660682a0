//! Engine context provider for Pagewright.
//!
//! Provides the ContentEngine instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| engine);
//!
//! // In child components
//! let engine = use_engine();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use pagewright_core::ContentEngine;
use tokio::sync::RwLock;

/// Shared engine type for context.
///
/// The engine is wrapped in Arc<RwLock<>> so components can read it
/// concurrently while startup installs it once it is ready.
pub type SharedEngine = Arc<RwLock<Option<ContentEngine>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the upload endpoint base URL set from command line args.
pub fn get_upload_url() -> String {
    crate::get_upload_url()
}

/// Hook to access the ContentEngine from context.
///
/// Returns a Signal containing the shared engine state.
///
/// # Example
///
/// ```ignore
/// let engine = use_engine();
///
/// let shared = engine();
/// if let Some(ref eng) = *shared.read().await {
///     let records = eng.list_about()?;
/// }
/// ```
pub fn use_engine() -> Signal<SharedEngine> {
    use_context::<Signal<SharedEngine>>()
}

/// Hook to check if the engine is initialized.
///
/// Returns a reactive signal that updates when engine state changes.
pub fn use_engine_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
