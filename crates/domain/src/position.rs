//! Panel placement

use serde::{Deserialize, Serialize};

/// Left offset used when nothing has been saved yet
pub const DEFAULT_LEFT: f64 = 130.0;
/// Top offset used when nothing has been saved yet
pub const DEFAULT_TOP: f64 = 90.0;

/// Screen position of the panel in pixels. Zero counts as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudPosition {
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
}

fn set(coord: Option<f64>) -> Option<f64> {
    coord.filter(|v| *v != 0.0)
}

impl HudPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
        }
    }

    pub fn is_unset(&self) -> bool {
        set(self.left).is_none() && set(self.top).is_none()
    }
}

/// Resolve where the panel goes.
///
/// An unset request takes the saved position. Without pop-out the panel is
/// docked, so both coordinates come from the saved position or the defaults.
pub fn resolve_position(requested: HudPosition, saved: Option<HudPosition>, pop_out: bool) -> HudPosition {
    let mut position = if requested.is_unset() {
        saved.unwrap_or_default()
    } else {
        requested
    };

    if !pop_out {
        let saved = saved.unwrap_or_default();
        position.left = Some(set(saved.left).unwrap_or(DEFAULT_LEFT));
        position.top = Some(set(saved.top).unwrap_or(DEFAULT_TOP));
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docked_panel_uses_defaults_without_saved_position() {
        let position = resolve_position(HudPosition::default(), None, false);
        assert_eq!(position, HudPosition::new(130.0, 90.0));
    }

    #[test]
    fn docked_panel_prefers_saved_coordinates() {
        let saved = HudPosition::new(300.0, 0.0);
        let position = resolve_position(HudPosition::new(10.0, 10.0), Some(saved), false);
        assert_eq!(position, HudPosition::new(300.0, 90.0));
    }

    #[test]
    fn pop_out_keeps_requested_position() {
        let position = resolve_position(HudPosition::new(42.0, 17.0), Some(HudPosition::new(1.0, 1.0)), true);
        assert_eq!(position, HudPosition::new(42.0, 17.0));
    }

    #[test]
    fn pop_out_with_unset_request_restores_saved() {
        let saved = HudPosition::new(500.0, 250.0);
        assert_eq!(resolve_position(HudPosition::new(0.0, 0.0), Some(saved), true), saved);
    }
}
