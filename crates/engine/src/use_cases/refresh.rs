//! Refresh use case - compute the HUD view from one host snapshot.

use std::sync::Arc;

use partyhud_domain::{build_view, HudSettings, HudView, SystemAdapter};
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::{PortError, SnapshotSource};

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Snapshot unavailable: {0}")]
    Snapshot(#[from] PortError),
}

/// Party ids of the most recent refresh
#[derive(Debug, Default)]
struct RefreshState {
    last_party_ids: Vec<String>,
}

/// Runs refreshes one at a time.
///
/// Each refresh reads exactly one snapshot, so a view never mixes host state
/// from different moments. A refresh requested while another runs waits for
/// it to finish.
pub struct RefreshHud {
    source: Arc<dyn SnapshotSource>,
    adapter: Arc<dyn SystemAdapter>,
    state: Mutex<RefreshState>,
}

impl RefreshHud {
    pub fn new(source: Arc<dyn SnapshotSource>, adapter: Arc<dyn SystemAdapter>) -> Self {
        Self {
            source,
            adapter,
            state: Mutex::new(RefreshState::default()),
        }
    }

    pub fn adapter(&self) -> &Arc<dyn SystemAdapter> {
        &self.adapter
    }

    pub async fn execute(&self, settings: &HudSettings) -> Result<HudView, RefreshError> {
        let mut state = self.state.lock().await;
        let correlation_id = CorrelationId::new();
        let span = tracing::info_span!(
            "refresh",
            correlation_id = %correlation_id.short(),
            system_id = self.adapter.system_id(),
            captured_at = tracing::field::Empty,
        );

        async {
            let snapshot = self.source.snapshot().await.inspect_err(|e| {
                tracing::warn!(error = %e, "Failed to read host snapshot");
            })?;
            if let Some(captured_at) = snapshot.captured_at {
                tracing::Span::current().record("captured_at", tracing::field::display(captured_at));
            }

            let view = build_view(self.adapter.as_ref(), &snapshot, settings);
            state.last_party_ids = view.party_ids();

            tracing::info!(
                party = view.party.len(),
                enemies = view.enemies.len(),
                in_combat = snapshot.in_combat(),
                "HUD refreshed"
            );
            Ok::<_, RefreshError>(view)
        }
        .instrument(span)
        .await
    }

    /// Party ids from the last successful refresh
    pub async fn last_party_ids(&self) -> Vec<String> {
        self.state.lock().await.last_party_ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockSnapshotSource;
    use partyhud_domain::{Actor, Dnd5eSystem, GenericSystem, HostSnapshot, ShowMode, User};
    use serde_json::json;

    fn table() -> HostSnapshot {
        let mut snapshot = HostSnapshot::new("u1");
        snapshot.actors = vec![Actor::new("hero", "Hero")
            .with_system(json!({"attributes": {"hp": {"value": 10, "max": 18}}}))];
        snapshot.users = vec![User::new("u1", "Ann").active().with_character("hero")];
        snapshot
    }

    #[tokio::test]
    async fn refresh_builds_view_and_remembers_party() {
        let mut source = MockSnapshotSource::new();
        source.expect_snapshot().times(1).returning(|| Ok(table()));

        let refresh = RefreshHud::new(Arc::new(source), Arc::new(Dnd5eSystem::new()));
        let view = refresh.execute(&HudSettings::default()).await.unwrap();

        assert_eq!(view.party.len(), 1);
        assert_eq!(view.party[0].primary.percent, 56);
        assert_eq!(refresh.last_party_ids().await, vec!["hero".to_string()]);
    }

    #[tokio::test]
    async fn hidden_party_clears_remembered_ids() {
        let mut source = MockSnapshotSource::new();
        source.expect_snapshot().returning(|| Ok(table()));
        let refresh = RefreshHud::new(Arc::new(source), Arc::new(GenericSystem::default()));

        refresh.execute(&HudSettings::default()).await.unwrap();
        let hidden = HudSettings {
            show_mode: ShowMode::Hidden,
            ..HudSettings::default()
        };
        let view = refresh.execute(&hidden).await.unwrap();

        assert!(view.party.is_empty());
        assert!(refresh.last_party_ids().await.is_empty());
    }

    #[tokio::test]
    async fn snapshot_failure_is_reported() {
        let mut source = MockSnapshotSource::new();
        source
            .expect_snapshot()
            .returning(|| Err(PortError::host("snapshot", "host offline")));

        let refresh = RefreshHud::new(Arc::new(source), Arc::new(GenericSystem::default()));
        let err = refresh.execute(&HudSettings::default()).await.unwrap_err();

        assert!(matches!(err, RefreshError::Snapshot(PortError::Host { .. })));
        assert!(refresh.last_party_ids().await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_refreshes_each_read_one_snapshot() {
        let mut source = MockSnapshotSource::new();
        source.expect_snapshot().times(2).returning(|| Ok(table()));
        let refresh = Arc::new(RefreshHud::new(Arc::new(source), Arc::new(GenericSystem::default())));

        let settings = HudSettings::default();
        let (a, b) = tokio::join!(refresh.execute(&settings), refresh.execute(&settings));
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
