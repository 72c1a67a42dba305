//! 13th Age (Archmage) adapter.
//!
//! Health plus recoveries, level on both party members and enemies.

use serde_json::Value;

use super::generic;
use super::traits::SystemAdapter;
use super::turn_order::sequence_by_turn_order;
use crate::entities::{Actor, Combat, Token};
use crate::value_objects::{Bar, NormalizedEntry};

const HP: &str = "attributes.hp";
const RECOVERIES: &str = "attributes.recoveries";
const LEVEL: &str = "attributes.level.value";

/// 13th Age game system.
#[derive(Debug, Default)]
pub struct ArchmageSystem;

impl ArchmageSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemAdapter for ArchmageSystem {
    fn system_id(&self) -> &str {
        "archmage"
    }

    fn display_name(&self) -> &str {
        "13th Age"
    }

    fn primary_attribute(&self) -> &str {
        HP
    }

    fn secondary_attribute(&self) -> Option<&str> {
        Some(RECOVERIES)
    }

    fn translate_resource_bar(&self, system: &Value, path: &str) -> Bar {
        let mut bar = generic::resource_bar(system, path);
        match path {
            HP => bar.name = "Health".to_string(),
            RECOVERIES => bar.name = "Recoveries".to_string(),
            _ => {}
        }
        bar
    }

    fn translate_party_actor(&self, actor: &Actor) -> NormalizedEntry {
        let mut entry = generic::party_actor(self, actor);
        entry.level = generic::level_at(&actor.system, LEVEL);
        entry
    }

    fn translate_enemy_token(&self, token: &Token, actor: Option<&Actor>) -> NormalizedEntry {
        let mut entry = generic::enemy_token(self, token, actor);
        entry.level = generic::level_at(generic::enemy_system(token, actor), LEVEL);
        entry
    }

    fn set_initiatives(&self, entries: Vec<NormalizedEntry>, combat: &Combat) -> Vec<NormalizedEntry> {
        sequence_by_turn_order(entries, combat)
    }
}
