//! Party HUD domain: host snapshot model, system adapters and the
//! party/enemy resolution pipeline.
//!
//! Everything here is pure. A refresh hands one [`HostSnapshot`] to
//! [`build_view`] and gets back a [`HudView`].

pub mod types;

pub mod derived;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod position;
pub mod resolution;
pub mod targeting;
pub mod value_objects;
pub mod view;

pub use entities::{
    ActiveEffect, Actor, Combat, Combatant, EffectClassification, HostSnapshot, PrototypeToken,
    Scene, SnapshotIndex, Token, User, BOSS_FLAG, HUD_FLAG_SCOPE,
};

pub use error::HudError;

// Re-export game system traits and types
pub use game_systems::{
    sequence_by_turn_order, AdapterRegistry, ArchmageSystem, Dnd5eSystem, FabulaSystem,
    GenericSystem, Pf2eSystem, SwadeSystem, SystemAdapter,
};

// Re-export ID types
pub use ids::{ActorId, CombatId, CombatantId, SceneId, TokenId, UserId};

pub use position::{resolve_position, HudPosition, DEFAULT_LEFT, DEFAULT_TOP};
pub use resolution::{build_enemies, build_party, Party};
pub use targeting::{plan_target_update, TargetUpdate};

pub use types::{Disposition, HudSettings, PanelStyle, PartySetup, PartySize, ShowMode};

pub use value_objects::{Bar, Effect, NormalizedEntry, ResourceValues};

pub use view::{build_view, HudView};
