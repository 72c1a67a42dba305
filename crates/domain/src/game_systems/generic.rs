//! Generic adapter and the shared translation functions every system
//! builds on.

use serde_json::Value;

use super::traits::SystemAdapter;
use crate::entities::{Actor, Token};
use crate::value_objects::{attribute, resource, Bar, NormalizedEntry, THEME_HP, THEME_MP};

/// Primary attribute used when nothing else is configured
pub const DEFAULT_PRIMARY_ATTRIBUTE: &str = "attributes.hp";

static EMPTY_TREE: Value = Value::Null;

const HEALTH_KEYS: &[&str] = &["hp", "health", "wounds", "vigor", "stamina"];

/// Readable name derived from the last path segment.
///
/// Short keys are treated as abbreviations (`hp` -> `HP`), longer ones are
/// capitalized (`recoveries` -> `Recoveries`).
pub fn bar_name(path: &str) -> String {
    let key = path.rsplit('.').next().unwrap_or(path);
    if key.chars().count() <= 3 {
        return key.to_uppercase();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Theme tag for a path: health-like keys get the HP theme
pub fn bar_theme(path: &str) -> &'static str {
    let key = path.rsplit('.').next().unwrap_or(path).to_ascii_lowercase();
    if HEALTH_KEYS.contains(&key.as_str()) {
        THEME_HP
    } else {
        THEME_MP
    }
}

/// Resolve a resource bar, substituting a zero bar when the path is missing
pub fn resource_bar(system: &Value, path: &str) -> Bar {
    let name = bar_name(path);
    let theme = bar_theme(path);
    match resource(system, path) {
        Ok(values) => Bar::new(name, values).with_theme(theme),
        Err(error) => {
            tracing::debug!(path, error = %error, "Attribute missing, using zero bar");
            Bar::zero(name).with_theme(theme)
        }
    }
}

/// Raw level/tier value at `path`, absent when missing
pub fn level_at(system: &Value, path: &str) -> Option<Value> {
    match attribute(system, path) {
        Ok(level) => Some(level.clone()),
        Err(error) => {
            tracing::debug!(path, error = %error, "Level attribute missing");
            None
        }
    }
}

/// Attribute tree an enemy token is read from: an unlinked token's own tree
/// wins over its actor's
pub fn enemy_system<'a>(token: &'a Token, actor: Option<&'a Actor>) -> &'a Value {
    token
        .system_override
        .as_ref()
        .or(actor.map(|a| &a.system))
        .unwrap_or(&EMPTY_TREE)
}

/// Generic party translation: primary bar, optional secondary bar, effects
pub fn party_actor<A: SystemAdapter + ?Sized>(adapter: &A, actor: &Actor) -> NormalizedEntry {
    let primary = adapter.translate_resource_bar(&actor.system, adapter.primary_attribute());
    let secondary = adapter
        .secondary_attribute()
        .map(|path| adapter.translate_resource_bar(&actor.system, path));

    NormalizedEntry::new(actor.id.as_str(), actor.name.as_str(), primary)
        .with_image(actor.img.as_str())
        .with_secondary(secondary)
        .with_effects(actor.visible_effects())
}

/// Generic enemy translation: primary bar and effects, no secondary or level
pub fn enemy_token<A: SystemAdapter + ?Sized>(
    adapter: &A,
    token: &Token,
    actor: Option<&Actor>,
) -> NormalizedEntry {
    let system = enemy_system(token, actor);
    let primary = adapter.translate_resource_bar(system, adapter.primary_attribute());

    let name = match (token.name.is_empty(), actor) {
        (true, Some(actor)) => actor.name.as_str(),
        _ => token.name.as_str(),
    };
    let image = match (token.texture.is_empty(), actor) {
        (true, Some(actor)) => actor.img.as_str(),
        _ => token.texture.as_str(),
    };

    let entry = NormalizedEntry::new(token.id.as_str(), name, primary).with_image(image);
    match actor {
        Some(actor) => entry.with_effects(actor.visible_effects()),
        None => entry,
    }
}

/// Adapter used for systems without a dedicated implementation.
///
/// Which attributes feed the two bars is configurable because every system
/// names them differently.
#[derive(Debug, Clone)]
pub struct GenericSystem {
    primary: String,
    secondary: Option<String>,
}

impl Default for GenericSystem {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_ATTRIBUTE, None)
    }
}

impl GenericSystem {
    pub fn new(primary: impl Into<String>, secondary: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary,
        }
    }
}

impl SystemAdapter for GenericSystem {
    fn system_id(&self) -> &str {
        "generic"
    }

    fn display_name(&self) -> &str {
        "Generic"
    }

    fn primary_attribute(&self) -> &str {
        &self.primary
    }

    fn secondary_attribute(&self) -> Option<&str> {
        self.secondary.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ActiveEffect;
    use serde_json::json;

    fn hero() -> Actor {
        Actor::new("a1", "Mr. Dragonborn")
            .with_img("dragon-red.webp")
            .with_system(json!({
                "attributes": {"hp": {"value": 10, "max": 18, "temp": 2}},
                "resources": {"mp": {"value": 3, "max": 8}}
            }))
            .with_effect(ActiveEffect::buff("Blessed", "emerald.jpg"))
            .with_effect(ActiveEffect::new("Hidden", "h.jpg").disabled())
    }

    #[test]
    fn bar_names_from_paths() {
        assert_eq!(bar_name("attributes.hp"), "HP");
        assert_eq!(bar_name("attributes.recoveries"), "Recoveries");
        assert_eq!(bar_name("power"), "Power");
    }

    #[test]
    fn bar_themes_from_paths() {
        assert_eq!(bar_theme("attributes.hp"), THEME_HP);
        assert_eq!(bar_theme("wounds"), THEME_HP);
        assert_eq!(bar_theme("resources.mp"), THEME_MP);
    }

    #[test]
    fn translates_party_actor() {
        let adapter = GenericSystem::new("attributes.hp", Some("resources.mp".to_string()));
        let entry = adapter.translate_party_actor(&hero());

        assert_eq!(entry.id, "a1");
        assert_eq!(entry.image, "dragon-red.webp");
        assert_eq!(entry.primary.value, 10.0);
        assert_eq!(entry.primary.temp, Some(2.0));
        assert_eq!(entry.primary.theme.as_deref(), Some(THEME_HP));
        assert_eq!(entry.secondary.as_ref().map(|b| b.max), Some(8.0));
        assert_eq!(entry.effects.len(), 1);
        assert_eq!(entry.level, None);
    }

    #[test]
    fn missing_attribute_yields_zero_bar() {
        let adapter = GenericSystem::new("attributes.vitality", Some("resources.ki".to_string()));
        let entry = adapter.translate_party_actor(&hero());
        assert_eq!(entry.primary, Bar::zero("Vitality").with_theme(THEME_MP));
        assert_eq!(entry.secondary.map(|b| b.value), Some(0.0));
    }

    #[test]
    fn no_secondary_when_unconfigured() {
        let entry = GenericSystem::default().translate_party_actor(&hero());
        assert!(entry.secondary.is_none());
    }

    #[test]
    fn enemy_prefers_token_override_and_art() {
        let actor = hero();
        let token = Token::new("t1", "Goblin Boss")
            .with_actor("a1")
            .with_texture("goblin.webp")
            .with_system_override(json!({"attributes": {"hp": {"value": 4, "max": 7}}}));

        let entry = GenericSystem::default().translate_enemy_token(&token, Some(&actor));
        assert_eq!(entry.id, "t1");
        assert_eq!(entry.name, "Goblin Boss");
        assert_eq!(entry.image, "goblin.webp");
        assert_eq!(entry.primary.value, 4.0);
        assert!(entry.secondary.is_none());
        assert_eq!(entry.effects.len(), 1);
    }

    #[test]
    fn enemy_falls_back_to_actor_data() {
        let actor = hero();
        let token = Token::new("t1", "").with_actor("a1");
        let entry = GenericSystem::default().translate_enemy_token(&token, Some(&actor));
        assert_eq!(entry.name, "Mr. Dragonborn");
        assert_eq!(entry.image, "dragon-red.webp");
        assert_eq!(entry.primary.max, 18.0);
    }

    #[test]
    fn enemy_without_actor_is_zero() {
        let token = Token::new("t9", "Mystery");
        let entry = GenericSystem::default().translate_enemy_token(&token, None);
        assert_eq!(entry.primary.value, 0.0);
        assert!(entry.effects.is_empty());
    }
}
