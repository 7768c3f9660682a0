//! Content schema definitions and the collection registry.
//!
//! A [`CollectionSchema`] declares the persisted shape of one record type:
//! field names, kinds, required/default rules, and whether the store manages
//! `created_at`/`updated_at` automatically. Schemas are installed into a
//! [`SchemaRegistry`] exactly once per name; repeated installation returns
//! the existing handle, so constructing a second engine in the same process
//! is harmless.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Kind of a persisted field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// UTF-8 text
    Text,
    /// Boolean flag
    Bool,
    /// Unix timestamp in seconds, managed by the store
    Timestamp,
}

/// Declaration of a single field within a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as persisted
    pub name: String,
    /// Field kind
    pub kind: FieldKind,
    /// Whether the field must be present and non-empty
    pub required: bool,
    /// Default applied when a boolean field is omitted
    pub default_bool: Option<bool>,
}

impl FieldSpec {
    /// A required text field (must be present and non-blank)
    pub fn required_text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Text,
            required: true,
            default_bool: None,
        }
    }

    /// An optional text field with no format constraint
    pub fn optional_text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Text,
            required: false,
            default_bool: None,
        }
    }

    /// A boolean field with a default used when the caller omits it
    pub fn bool_with_default(name: &str, default: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Bool,
            required: false,
            default_bool: Some(default),
        }
    }
}

/// Declarative schema for one record collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    /// Collection name (e.g. "About")
    pub name: String,
    /// Declared fields, in persisted order
    pub fields: Vec<FieldSpec>,
    /// Whether the store manages `created_at`/`updated_at`
    pub timestamps: bool,
}

impl CollectionSchema {
    /// Start a schema for the named collection
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            timestamps: false,
        }
    }

    /// Add a field declaration
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Enable automatic `created_at`/`updated_at` management
    pub fn with_timestamps(mut self) -> Self {
        self.timestamps = true;
        self
    }

    /// Look up a declared field by name
    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a draft document against the declared constraints.
    ///
    /// The draft is inspected as a JSON object: required text fields must be
    /// present, of string type, and non-blank. Optional fields may be absent
    /// or null. Timestamp fields are store-managed and never expected in a
    /// draft.
    pub fn validate_value(&self, doc: &serde_json::Value) -> CoreResult<()> {
        for spec in &self.fields {
            let value = doc.get(&spec.name);
            match spec.kind {
                FieldKind::Text => {
                    let text = value.and_then(|v| v.as_str());
                    if spec.required {
                        match text {
                            Some(s) if !s.trim().is_empty() => {}
                            Some(_) => {
                                return Err(self.violation(&spec.name, "required field is empty"))
                            }
                            None => {
                                return Err(self.violation(&spec.name, "required field is missing"))
                            }
                        }
                    }
                }
                FieldKind::Bool => {
                    // Absent booleans take their declared default at the
                    // serde layer; a present value must actually be a bool.
                    if let Some(v) = value {
                        if !v.is_boolean() && !v.is_null() {
                            return Err(self.violation(&spec.name, "expected a boolean"));
                        }
                    }
                }
                FieldKind::Timestamp => {}
            }
        }
        Ok(())
    }

    fn violation(&self, field: &str, reason: &str) -> CoreError {
        CoreError::Validation {
            collection: self.name.clone(),
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Process-lifetime registry of collection schemas.
///
/// Replaces ambient "define the model if it isn't defined yet" state with an
/// explicit lookup-or-create handle owned by application startup.
#[derive(Default)]
pub struct SchemaRegistry {
    inner: RwLock<HashMap<String, Arc<CollectionSchema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the schema registered under `name`, installing the one built
    /// by `build` if this is the first request for that name.
    ///
    /// Registration is idempotent: later calls ignore `build` and return the
    /// original handle.
    pub fn lookup_or_create<F>(&self, name: &str, build: F) -> Arc<CollectionSchema>
    where
        F: FnOnce() -> CollectionSchema,
    {
        if let Some(existing) = self.inner.read().get(name) {
            return existing.clone();
        }
        let mut map = self.inner.write();
        // Second check under the write lock: another caller may have
        // installed the schema between our read and write.
        map.entry(name.to_string())
            .or_insert_with(|| Arc::new(build()))
            .clone()
    }

    /// Return the schema registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<Arc<CollectionSchema>> {
        self.inner.read().get(name).cloned()
    }

    /// Number of registered collections
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no collections are registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
