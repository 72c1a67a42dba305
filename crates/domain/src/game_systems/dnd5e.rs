//! D&D 5th Edition adapter.
//!
//! Hit points include the temporary maximum; characters report their level
//! and NPCs their challenge rating.

use serde_json::Value;

use super::generic;
use super::traits::SystemAdapter;
use super::turn_order::sequence_by_turn_order;
use crate::entities::{Actor, Combat, Token};
use crate::value_objects::{number, Bar, NormalizedEntry};

const HP: &str = "attributes.hp";
const HP_TEMPMAX: &str = "attributes.hp.tempmax";
const LEVEL: &str = "details.level";
const CHALLENGE: &str = "details.cr";

/// D&D 5th Edition game system.
#[derive(Debug, Default)]
pub struct Dnd5eSystem;

impl Dnd5eSystem {
    pub fn new() -> Self {
        Self
    }

    fn level(system: &Value) -> Option<Value> {
        generic::level_at(system, LEVEL).or_else(|| generic::level_at(system, CHALLENGE))
    }
}

impl SystemAdapter for Dnd5eSystem {
    fn system_id(&self) -> &str {
        "dnd5e"
    }

    fn display_name(&self) -> &str {
        "D&D 5th Edition"
    }

    fn primary_attribute(&self) -> &str {
        HP
    }

    fn translate_resource_bar(&self, system: &Value, path: &str) -> Bar {
        let mut bar = generic::resource_bar(system, path);
        if path == HP {
            bar.name = "HP".to_string();
            // tempmax may be negative (max HP reduction)
            bar.max = (bar.max + number(system, HP_TEMPMAX).unwrap_or(0.0)).max(0.0);
        }
        bar
    }

    fn translate_party_actor(&self, actor: &Actor) -> NormalizedEntry {
        let mut entry = generic::party_actor(self, actor);
        entry.level = Self::level(&actor.system);
        entry
    }

    fn translate_enemy_token(&self, token: &Token, actor: Option<&Actor>) -> NormalizedEntry {
        let mut entry = generic::enemy_token(self, token, actor);
        entry.level = Self::level(generic::enemy_system(token, actor));
        entry
    }

    fn set_initiatives(&self, entries: Vec<NormalizedEntry>, combat: &Combat) -> Vec<NormalizedEntry> {
        sequence_by_turn_order(entries, combat)
    }
}
