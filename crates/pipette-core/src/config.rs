use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// Configuration carried by a [`TracedPipe`](crate::traced::TracedPipe).
///
/// Every field is reported on the log events a traced chain emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Human-readable name for the chain.
    #[serde(default)]
    pub label: Option<String>,

    /// Tags for filtering and categorization.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Arbitrary metadata key-value pairs.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Unique identifier for this run.
    #[serde(default = "Uuid::new_v4")]
    pub run_id: Uuid,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            label: None,
            tags: Vec::new(),
            metadata: HashMap::new(),
            run_id: Uuid::new_v4(),
        }
    }
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The label reported on log events, `"pipe"` when unset.
    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("pipe")
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }
}
