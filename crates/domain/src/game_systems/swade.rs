//! Savage Worlds Adventure Edition adapter.
//!
//! SWADE counts wounds upward, so the primary bar shows the wounds a
//! character can still take (`max - value`). Bennies fill the secondary bar.
//! The system has no numeric level.

use serde_json::Value;

use super::generic;
use super::traits::SystemAdapter;
use super::turn_order::sequence_by_turn_order;
use crate::entities::Combat;
use crate::value_objects::{Bar, NormalizedEntry};

const WOUNDS: &str = "wounds";
const BENNIES: &str = "bennies";

/// Savage Worlds game system.
#[derive(Debug, Default)]
pub struct SwadeSystem;

impl SwadeSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemAdapter for SwadeSystem {
    fn system_id(&self) -> &str {
        "swade"
    }

    fn display_name(&self) -> &str {
        "Savage Worlds Adventure Edition"
    }

    fn primary_attribute(&self) -> &str {
        WOUNDS
    }

    fn secondary_attribute(&self) -> Option<&str> {
        Some(BENNIES)
    }

    fn translate_resource_bar(&self, system: &Value, path: &str) -> Bar {
        let mut bar = generic::resource_bar(system, path);
        match path {
            WOUNDS => {
                bar.name = "Wounds".to_string();
                bar.value = (bar.max - bar.value).max(0.0);
            }
            BENNIES => bar.name = "Bennies".to_string(),
            _ => {}
        }
        bar
    }

    fn set_initiatives(&self, entries: Vec<NormalizedEntry>, combat: &Combat) -> Vec<NormalizedEntry> {
        sequence_by_turn_order(entries, combat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Actor;
    use serde_json::json;

    #[test]
    fn wounds_are_shown_as_remaining() {
        let actor = Actor::new("a1", "Marshal").with_system(json!({
            "wounds": {"value": 1, "max": 3},
            "bennies": {"value": 2, "max": 3}
        }));
        let entry = SwadeSystem::new().translate_party_actor(&actor);
        assert_eq!(entry.primary.name, "Wounds");
        assert_eq!(entry.primary.value, 2.0);
        assert_eq!(entry.primary.max, 3.0);
        assert_eq!(entry.secondary.map(|b| b.value), Some(2.0));
        assert_eq!(entry.level, None);
    }

    #[test]
    fn overflowing_wounds_floor_at_zero() {
        let actor = Actor::new("a1", "Extra").with_system(json!({"wounds": {"value": 5, "max": 3}}));
        let entry = SwadeSystem::new().translate_party_actor(&actor);
        assert_eq!(entry.primary.value, 0.0);
    }
}
