//! Fabula Ultima adapter.

use serde_json::Value;

use super::generic;
use super::traits::SystemAdapter;
use crate::entities::Actor;
use crate::value_objects::{Bar, NormalizedEntry};

const HP: &str = "resources.hp";
const MP: &str = "resources.mp";
const LEVEL: &str = "level.value";

/// Fabula Ultima game system.
///
/// Turns alternate between sides rather than following initiative, so the
/// party keeps its resolved order during combat.
#[derive(Debug, Default)]
pub struct FabulaSystem;

impl FabulaSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemAdapter for FabulaSystem {
    fn system_id(&self) -> &str {
        "fabulaultima"
    }

    fn display_name(&self) -> &str {
        "Fabula Ultima"
    }

    fn primary_attribute(&self) -> &str {
        HP
    }

    fn secondary_attribute(&self) -> Option<&str> {
        Some(MP)
    }

    fn translate_resource_bar(&self, system: &Value, path: &str) -> Bar {
        let mut bar = generic::resource_bar(system, path);
        match path {
            HP => bar.name = "HP".to_string(),
            MP => bar.name = "MP".to_string(),
            _ => {}
        }
        bar
    }

    fn translate_party_actor(&self, actor: &Actor) -> NormalizedEntry {
        let mut entry = generic::party_actor(self, actor);
        entry.level = generic::level_at(&actor.system, LEVEL);
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Combat, Combatant};
    use crate::value_objects::THEME_HP;
    use serde_json::json;

    fn heroine() -> Actor {
        Actor::new("a1", "Elara").with_system(json!({
            "resources": {"hp": {"value": 40, "max": 55}, "mp": {"value": 20, "max": 45}},
            "level": {"value": 10}
        }))
    }

    #[test]
    fn party_actor_has_hp_mp_and_level() {
        let entry = FabulaSystem::new().translate_party_actor(&heroine());
        assert_eq!(entry.primary.name, "HP");
        assert_eq!(entry.primary.theme.as_deref(), Some(THEME_HP));
        assert_eq!(entry.secondary.as_ref().map(|b| b.name.as_str()), Some("MP"));
        assert_eq!(entry.level, Some(json!(10)));
    }

    #[test]
    fn initiative_leaves_order_alone() {
        let adapter = FabulaSystem::new();
        let a = adapter.translate_party_actor(&heroine());
        let mut b = a.clone();
        b.id = "a2".to_string();
        let combat = Combat::new("c1")
            .with_combatant(Combatant::new("k1").with_actor("a2").with_initiative(9.0))
            .with_combatant(Combatant::new("k2").with_actor("a1").with_initiative(3.0));

        let ordered = adapter.set_initiatives(vec![a, b], &combat);
        assert_eq!(ordered[0].id, "a1");
        assert_eq!(ordered[0].initiative, None);
    }
}
