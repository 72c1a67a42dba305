//! Host entities - read-only snapshots of host documents

mod actor;
mod combat;
mod scene;
mod snapshot;
mod token;
mod user;

pub use actor::{ActiveEffect, Actor, EffectClassification, PrototypeToken};
pub use combat::{Combat, Combatant};
pub use scene::Scene;
pub use snapshot::{HostSnapshot, SnapshotIndex};
pub use token::{Token, BOSS_FLAG, HUD_FLAG_SCOPE};
pub use user::User;
