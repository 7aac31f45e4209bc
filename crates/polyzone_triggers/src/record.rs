//! Persisted trigger records
//!
//! A record holds what is needed to rebuild a trigger: identity, name,
//! world position and the preprocessed anchors. Callbacks are never
//! persisted and must be attached again after loading.

use crate::config::TriggerConfig;
use crate::error::Result;
use crate::trigger::{Trigger, TriggerDesc, TriggerId};
use polyzone_math::{LocalPoint, WorldPoint};
use serde::{Deserialize, Serialize};

/// Serializable trigger definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRecord {
    #[serde(default)]
    pub id: TriggerId,
    #[serde(default = "default_name")]
    pub name: String,
    pub position: WorldPoint,
    pub anchors: Vec<LocalPoint>,
}

fn default_name() -> String {
    String::from("unnamed")
}

impl TriggerRecord {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Trigger {
    /// Snapshot this trigger for persistence
    pub fn to_record(&self) -> TriggerRecord {
        TriggerRecord {
            id: self.id(),
            name: self.name().to_owned(),
            position: self.position(),
            anchors: self.anchors().to_vec(),
        }
    }

    /// Rebuild a trigger from a record.
    ///
    /// Stored anchors already span a volume, so they are not extruded again.
    pub fn from_record(record: TriggerRecord, config: &TriggerConfig) -> Result<Self> {
        let desc = TriggerDesc::new(record.anchors)
            .with_id(record.id)
            .named(record.name)
            .at(record.position);
        Trigger::from_desc(desc, config)
    }
}
