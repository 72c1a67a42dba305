//! The uniform per-actor display record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::bar::Bar;
use crate::entities::{ActiveEffect, EffectClassification};

/// An effect icon shown under a portrait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_buff: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_debuff: Option<bool>,
}

impl From<&ActiveEffect> for Effect {
    fn from(effect: &ActiveEffect) -> Self {
        let (is_buff, is_debuff) = match effect.classification {
            Some(EffectClassification::Buff) => (Some(true), None),
            Some(EffectClassification::Debuff) => (None, Some(true)),
            None => (None, None),
        };
        Self {
            name: effect.name.clone(),
            icon: effect.icon.clone(),
            is_buff,
            is_debuff,
        }
    }
}

/// One portrait row: a party member or an enemy token.
///
/// Party entries are keyed by actor id, enemy entries by token id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEntry {
    pub id: String,
    pub name: String,
    /// Level, tier or challenge rating exactly as the system stores it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Value>,
    pub image: String,
    pub primary: Bar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Bar>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub show_effects: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative: Option<f64>,
}

impl NormalizedEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, primary: Bar) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: None,
            image: String::new(),
            primary,
            secondary: None,
            effects: Vec::new(),
            show_effects: false,
            initiative: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_secondary(mut self, secondary: Option<Bar>) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn with_effects<'a>(mut self, effects: impl IntoIterator<Item = &'a ActiveEffect>) -> Self {
        self.effects = effects.into_iter().map(Effect::from).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::THEME_HP;

    #[test]
    fn effect_flags_are_mutually_exclusive() {
        let buff = Effect::from(&ActiveEffect::buff("Blessed", "b.jpg"));
        let debuff = Effect::from(&ActiveEffect::debuff("Affliction", "a.jpg"));
        let marker = Effect::from(&ActiveEffect::new("Red Crystal", "r.jpg"));

        assert_eq!((buff.is_buff, buff.is_debuff), (Some(true), None));
        assert_eq!((debuff.is_buff, debuff.is_debuff), (None, Some(true)));
        assert_eq!((marker.is_buff, marker.is_debuff), (None, None));
    }

    #[test]
    fn entry_serializes_for_templates() {
        let entry = NormalizedEntry::new("a1", "Fling", Bar::zero("HP").with_theme(THEME_HP))
            .with_image("fling.webp");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["showEffects"], false);
        assert!(json.get("secondary").is_none());
        assert!(json.get("level").is_none());
    }
}
