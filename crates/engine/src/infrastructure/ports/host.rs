//! Host-facing port traits.

use async_trait::async_trait;
use partyhud_domain::{ActorId, HostSnapshot, HudError, HudPosition, TargetUpdate, UserId};

use super::error::PortError;

/// Source of consistent host state, one snapshot per refresh.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn snapshot(&self) -> Result<HostSnapshot, PortError>;
}

/// Requests the HUD sends back to the host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostActions: Send + Sync {
    /// Replace or extend the targets of `user`
    async fn update_targets(&self, user: &UserId, update: &TargetUpdate) -> Result<(), PortError>;
    /// Open the actor's character sheet
    async fn render_sheet(&self, actor: &ActorId) -> Result<(), PortError>;
}

/// Persisted client settings owned by the HUD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepo: Send + Sync {
    async fn saved_position(&self) -> Result<Option<HudPosition>, PortError>;
    async fn save_position(&self, position: &HudPosition) -> Result<(), PortError>;
}

/// The UI element the panel is mounted on.
#[cfg_attr(test, mockall::automock)]
pub trait UiAnchor: Send + Sync {
    /// Move the panel; `HudError::AbsentUiAnchor` when the element is missing
    fn place(&self, position: &HudPosition) -> Result<(), HudError>;
}
