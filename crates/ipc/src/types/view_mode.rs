//! Display mode selected from the control panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IpcError;

/// Rendering style of the model. Affects materials only, never geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Solid,
    Wireframe,
    Textured,
    Normal,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Solid,
        ViewMode::Wireframe,
        ViewMode::Textured,
        ViewMode::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Solid => "solid",
            ViewMode::Wireframe => "wireframe",
            ViewMode::Textured => "textured",
            ViewMode::Normal => "normal",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = IpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IpcError::UnknownViewMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Wireframe".parse::<ViewMode>().unwrap(), ViewMode::Wireframe);
        assert_eq!(" normal ".parse::<ViewMode>().unwrap(), ViewMode::Normal);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "xray".parse::<ViewMode>(),
            Err(IpcError::UnknownViewMode(_))
        ));
    }

    #[test]
    fn test_display_matches_wire_name() {
        for mode in ViewMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
    }
}
