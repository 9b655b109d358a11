//! Hotspot descriptors sent to the UI for annotation panels.

use serde::{Deserialize, Serialize};

/// Static hotspot content the UI renders in its annotation panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotInfo {
    pub id: String,
    pub position: [f32; 3],
    pub title: String,
    pub description: String,
    /// CSS hex colour, e.g. `#4fc3f7`
    pub color: String,
}
