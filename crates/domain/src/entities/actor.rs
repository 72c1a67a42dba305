//! Actor entity - a host character document
//!
//! Actors are owned and mutated by the host. The HUD only ever reads a
//! snapshot of them; the `system` tree is game-system specific and is only
//! interpreted through an adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{ActorId, TokenId};
use crate::types::Disposition;

/// A character document as exposed by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub img: String,
    /// Game-system specific attribute tree
    #[serde(default)]
    pub system: Value,
    /// Placed token this actor is synthesized from, if any
    #[serde(default)]
    pub token: Option<TokenId>,
    #[serde(default)]
    pub prototype_token: PrototypeToken,
    #[serde(default)]
    pub effects: Vec<ActiveEffect>,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img: String::new(),
            system: Value::Null,
            token: None,
            prototype_token: PrototypeToken::default(),
            effects: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: Value) -> Self {
        self.system = system;
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<TokenId>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_prototype_disposition(mut self, disposition: Disposition) -> Self {
        self.prototype_token.disposition = disposition;
        self
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Effects that should be displayed (disabled ones are skipped)
    pub fn visible_effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter().filter(|e| !e.disabled)
    }
}

/// Default token settings used when the actor is not attached to a placed token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrototypeToken {
    #[serde(default)]
    pub disposition: Disposition,
}

/// Whether an effect helps or hinders its bearer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectClassification {
    Buff,
    Debuff,
}

/// An active effect on an actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub disabled: bool,
    /// Absent for neutral markers
    #[serde(default)]
    pub classification: Option<EffectClassification>,
}

impl ActiveEffect {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            disabled: false,
            classification: None,
        }
    }

    pub fn buff(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            classification: Some(EffectClassification::Buff),
            ..Self::new(name, icon)
        }
    }

    pub fn debuff(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            classification: Some(EffectClassification::Debuff),
            ..Self::new(name, icon)
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_host_actor() {
        let actor: Actor = serde_json::from_value(json!({
            "id": "a1",
            "name": "Mr. Dragonborn",
            "img": "tokens/dragon-red.webp",
            "system": {"attributes": {"hp": {"value": 10, "max": 18}}},
            "prototypeToken": {"disposition": 1},
            "effects": [{"name": "Blessed", "icon": "emerald.jpg", "classification": "buff"}]
        }))
        .unwrap();

        assert_eq!(actor.id, ActorId::new("a1"));
        assert!(actor.prototype_token.disposition.is_friendly());
        assert_eq!(actor.token, None);
        assert_eq!(
            actor.effects[0].classification,
            Some(EffectClassification::Buff)
        );
    }

    #[test]
    fn visible_effects_skip_disabled() {
        let actor = Actor::new("a1", "Fling")
            .with_effect(ActiveEffect::buff("Blessed", "b.jpg"))
            .with_effect(ActiveEffect::new("Stale", "s.jpg").disabled());
        let names: Vec<&str> = actor.visible_effects().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Blessed"]);
    }
}
