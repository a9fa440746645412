//! The uniform result of loading a file

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub type Metadata = BTreeMap<String, Value>;

pub const SOURCE_KEY: &str = "source";

/// Extracted text plus metadata for one file.
///
/// Fields are fixed at construction. `metadata` always holds `source`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    text: String,
    metadata: Metadata,
}

impl DocumentRecord {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self::with_metadata(text, source, Metadata::new())
    }

    /// Build a record carrying extra metadata entries. A `source` entry in
    /// `extra` is overwritten.
    pub fn with_metadata(
        text: impl Into<String>,
        source: impl Into<String>,
        mut extra: Metadata,
    ) -> Self {
        extra.insert(SOURCE_KEY.to_string(), Value::String(source.into()));
        Self {
            text: text.into(),
            metadata: extra,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn source(&self) -> &str {
        self.metadata
            .get(SOURCE_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Pretty JSON of the form `{ "text": ..., "metadata": {...} }`.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_parts(self) -> (String, Metadata) {
        (self.text, self.metadata)
    }
}
