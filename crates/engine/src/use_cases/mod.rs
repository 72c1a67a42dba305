//! Use cases - orchestration of domain operations across ports.

mod actions;
mod position;
mod refresh;

pub use actions::PortraitActions;
pub use position::PlacePanel;
pub use refresh::{RefreshError, RefreshHud};
