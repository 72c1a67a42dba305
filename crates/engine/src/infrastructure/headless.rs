//! Host stand-in for running without a live table.
//!
//! Requests are logged instead of sent and there is no panel element to
//! place, so position changes are only persisted.

use async_trait::async_trait;
use partyhud_domain::{ActorId, HudError, HudPosition, TargetUpdate, UserId};

use crate::infrastructure::ports::{HostActions, PortError, UiAnchor};

/// DOM id of the party panel mount point
pub const PANEL_ANCHOR: &str = "party-hud-party";

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessHost;

#[async_trait]
impl HostActions for HeadlessHost {
    async fn update_targets(&self, user: &UserId, update: &TargetUpdate) -> Result<(), PortError> {
        tracing::info!(
            user_id = %user,
            targets = ?update.targets,
            release_others = update.release_others,
            "Target update requested"
        );
        Ok(())
    }

    async fn render_sheet(&self, actor: &ActorId) -> Result<(), PortError> {
        tracing::info!(actor_id = %actor, "Character sheet requested");
        Ok(())
    }
}

impl UiAnchor for HeadlessHost {
    fn place(&self, _position: &HudPosition) -> Result<(), HudError> {
        Err(HudError::AbsentUiAnchor(PANEL_ANCHOR))
    }
}
