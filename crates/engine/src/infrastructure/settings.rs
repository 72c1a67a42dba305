//! In-process settings storage.

use async_trait::async_trait;
use partyhud_domain::HudPosition;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PortError, SettingsRepo};

/// Keeps the saved panel position for the lifetime of the process
#[derive(Default)]
pub struct InMemorySettingsRepo {
    position: RwLock<Option<HudPosition>>,
}

impl InMemorySettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepo for InMemorySettingsRepo {
    async fn saved_position(&self) -> Result<Option<HudPosition>, PortError> {
        Ok(*self.position.read().await)
    }

    async fn save_position(&self, position: &HudPosition) -> Result<(), PortError> {
        *self.position.write().await = Some(*position);
        Ok(())
    }
}
