//! Token entity - an actor placed on a scene

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{ActorId, TokenId};
use crate::types::Disposition;

/// Flag scope the HUD reads its own token markers from
pub const HUD_FLAG_SCOPE: &str = "party-hud";

/// Key of the boss marker inside [`HUD_FLAG_SCOPE`]
pub const BOSS_FLAG: &str = "boss";

/// A token placed on a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: TokenId,
    #[serde(default)]
    pub name: String,
    /// Token artwork; falls back to the actor image when empty
    #[serde(default)]
    pub texture: String,
    /// Owning actor; tokens without one are allowed by the host
    #[serde(default)]
    pub actor: Option<ActorId>,
    #[serde(default)]
    pub disposition: Disposition,
    /// Module-scoped flags: scope -> key -> value
    #[serde(default)]
    pub flags: BTreeMap<String, BTreeMap<String, Value>>,
    /// Attribute tree of an unlinked token; wins over the actor's tree
    #[serde(default)]
    pub system_override: Option<Value>,
}

impl Token {
    pub fn new(id: impl Into<TokenId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            texture: String::new(),
            actor: None,
            disposition: Disposition::default(),
            flags: BTreeMap::new(),
            system_override: None,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<ActorId>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = texture.into();
        self
    }

    pub fn with_flag(mut self, scope: &str, key: &str, value: Value) -> Self {
        self.flags
            .entry(scope.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self
    }

    pub fn with_system_override(mut self, system: Value) -> Self {
        self.system_override = Some(system);
        self
    }

    /// Read a flag value from a module scope
    pub fn flag(&self, scope: &str, key: &str) -> Option<&Value> {
        self.flags.get(scope).and_then(|f| f.get(key))
    }

    /// Authoring-time boss marker; only a literal `true` counts
    pub fn is_boss(&self) -> bool {
        matches!(self.flag(HUD_FLAG_SCOPE, BOSS_FLAG), Some(Value::Bool(true)))
    }
}
