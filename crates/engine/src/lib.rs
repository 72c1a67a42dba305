//! Party HUD engine library.
//!
//! Wraps the pure resolution core in `partyhud-domain` with host I/O.
//!
//! ## Structure
//!
//! - `use_cases/` - Refresh, portrait actions and panel placement
//! - `infrastructure/` - Port traits and their implementations
//! - `app` - Application composition and the process-wide instance

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{HudPorts, PartyHud};
