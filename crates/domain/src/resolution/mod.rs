//! Party and enemy resolution over one host snapshot.

mod enemies;
mod party;

pub use enemies::{build_enemies, resolve_enemy_tokens};
pub use party::{build_party, effective_disposition, resolve_party_members, Party};
