//! Session state and status types shown by the UI shell.

use serde::{Deserialize, Serialize};

use super::ViewMode;

/// Snapshot of the viewer session for the control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub view_mode: ViewMode,
    pub auto_rotate: bool,
    pub fullscreen: bool,
    pub loading: bool,
    pub fps: u32,
}

/// Colour bucket of the FPS badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FpsTier {
    Good,
    Fair,
    Poor,
}

impl FpsTier {
    pub fn from_fps(fps: u32) -> Self {
        if fps >= 55 {
            FpsTier::Good
        } else if fps >= 30 {
            FpsTier::Fair
        } else {
            FpsTier::Poor
        }
    }
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_tier_boundaries() {
        assert_eq!(FpsTier::from_fps(60), FpsTier::Good);
        assert_eq!(FpsTier::from_fps(55), FpsTier::Good);
        assert_eq!(FpsTier::from_fps(54), FpsTier::Fair);
        assert_eq!(FpsTier::from_fps(30), FpsTier::Fair);
        assert_eq!(FpsTier::from_fps(29), FpsTier::Poor);
        assert_eq!(FpsTier::from_fps(0), FpsTier::Poor);
    }
}
