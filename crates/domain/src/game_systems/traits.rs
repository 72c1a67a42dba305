//! Game system adapter trait.
//!
//! Each tabletop system stores vitals under its own attribute paths. An
//! adapter translates one system's actors and tokens into the uniform
//! [`NormalizedEntry`] schema. The default methods implement the generic
//! behaviour by delegating to [`super::generic`], so a system only overrides
//! what it customizes and can call the generic function first and patch the
//! result.

use serde_json::Value;

use super::generic;
use crate::entities::{Actor, Combat, Token};
use crate::value_objects::{Bar, NormalizedEntry};

/// Core trait all game system adapters implement.
///
/// Every method is a pure transformation of its inputs. Missing attributes
/// never fail: they produce zero bars.
pub trait SystemAdapter: Send + Sync {
    /// Host identifier of the game system (e.g., "dnd5e", "pf2e").
    fn system_id(&self) -> &str;

    /// Human-readable display name (e.g., "D&D 5th Edition").
    fn display_name(&self) -> &str;

    /// Attribute path of the health-like bar.
    fn primary_attribute(&self) -> &str;

    /// Attribute path of the secondary resource bar, if the system has one.
    fn secondary_attribute(&self) -> Option<&str> {
        None
    }

    /// Resolve `path` against an attribute tree into a named, themed bar.
    fn translate_resource_bar(&self, system: &Value, path: &str) -> Bar {
        generic::resource_bar(system, path)
    }

    /// Translate a party member.
    fn translate_party_actor(&self, actor: &Actor) -> NormalizedEntry {
        generic::party_actor(self, actor)
    }

    /// Translate an enemy token. `actor` is the token's owning actor when the
    /// snapshot has it.
    fn translate_enemy_token(&self, token: &Token, actor: Option<&Actor>) -> NormalizedEntry {
        generic::enemy_token(self, token, actor)
    }

    /// Order and annotate party entries by combat turn order.
    ///
    /// Only called while combat is active. Default: unchanged.
    fn set_initiatives(&self, entries: Vec<NormalizedEntry>, _combat: &Combat) -> Vec<NormalizedEntry> {
        entries
    }
}
