//! Combat entity - the active encounter and its turn order

use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, CombatId, CombatantId, TokenId};

/// An active combat encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combat {
    pub id: CombatId,
    /// Combatants in host turn order
    #[serde(default)]
    pub combatants: Vec<Combatant>,
}

impl Combat {
    pub fn new(id: impl Into<CombatId>) -> Self {
        Self {
            id: id.into(),
            combatants: Vec::new(),
        }
    }

    pub fn with_combatant(mut self, combatant: Combatant) -> Self {
        self.combatants.push(combatant);
        self
    }

    /// Turn index and combatant for the first combatant controlled by an actor
    pub fn turn_of(&self, actor_id: &str) -> Option<(usize, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .find(|(_, c)| c.actor.as_ref().is_some_and(|a| a.as_str() == actor_id))
    }
}

/// One participant of a combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: CombatantId,
    #[serde(default)]
    pub actor: Option<ActorId>,
    #[serde(default)]
    pub token: Option<TokenId>,
    #[serde(default)]
    pub initiative: Option<f64>,
}

impl Combatant {
    pub fn new(id: impl Into<CombatantId>) -> Self {
        Self {
            id: id.into(),
            actor: None,
            token: None,
            initiative: None,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<ActorId>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<TokenId>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_initiative(mut self, initiative: f64) -> Self {
        self.initiative = Some(initiative);
        self
    }
}
