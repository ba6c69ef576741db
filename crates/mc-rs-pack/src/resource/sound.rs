//! Sound event definitions (`<namespace>/sounds.json`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a namespace's `sounds.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SoundEvent {
    /// Sound files, either bare names or objects with playback settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sounds: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}
