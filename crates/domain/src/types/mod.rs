//! # PartyHud Domain Types
//!
//! Shared vocabulary types used by the resolvers, the adapters and the engine.
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

// Disposition types
mod disposition;
pub use disposition::Disposition;

// Settings vocabulary
mod hud_settings;
pub use hud_settings::{HudSettings, PanelStyle, PartySetup, ShowMode};

mod party_size;
pub use party_size::PartySize;
