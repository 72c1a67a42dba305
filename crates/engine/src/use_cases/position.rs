//! Panel placement use case.

use std::sync::Arc;

use partyhud_domain::{resolve_position, HudPosition};

use crate::infrastructure::ports::{PortError, SettingsRepo, UiAnchor};

pub struct PlacePanel {
    settings: Arc<dyn SettingsRepo>,
    anchor: Arc<dyn UiAnchor>,
    pop_out: bool,
}

impl PlacePanel {
    pub fn new(settings: Arc<dyn SettingsRepo>, anchor: Arc<dyn UiAnchor>, pop_out: bool) -> Self {
        Self {
            settings,
            anchor,
            pop_out,
        }
    }

    /// Resolve, apply and persist the panel position.
    ///
    /// A missing panel element only skips the move; the position is still
    /// saved.
    pub async fn execute(&self, requested: HudPosition) -> Result<HudPosition, PortError> {
        let saved = self.settings.saved_position().await?;
        let position = resolve_position(requested, saved, self.pop_out);

        if let Err(e) = self.anchor.place(&position) {
            tracing::warn!(error = %e, "Panel position not applied");
        }

        self.settings.save_position(&position).await?;
        tracing::debug!(left = ?position.left, top = ?position.top, "Panel position saved");
        Ok(position)
    }
}
