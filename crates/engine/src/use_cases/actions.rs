//! Portrait interactions: targeting and opening sheets.

use std::sync::Arc;

use partyhud_domain::{plan_target_update, ActorId, HudError};

use crate::infrastructure::ports::{HostActions, PortError, SnapshotSource};

/// Handles clicks on party and enemy portraits.
///
/// Stale references (an actor deleted since the last render) are logged and
/// dropped; only host failures surface as errors.
pub struct PortraitActions {
    source: Arc<dyn SnapshotSource>,
    host: Arc<dyn HostActions>,
}

impl PortraitActions {
    pub fn new(source: Arc<dyn SnapshotSource>, host: Arc<dyn HostActions>) -> Self {
        Self { source, host }
    }

    /// Target the actor's tokens; `additive` toggles instead of replacing.
    pub async fn target_actor(&self, actor_id: &ActorId, additive: bool) -> Result<(), PortError> {
        let snapshot = self.source.snapshot().await?;
        let update = match plan_target_update(&snapshot, actor_id, additive) {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!(actor_id = %actor_id, error = %e, "Ignoring portrait target");
                return Ok(());
            }
        };

        self.host
            .update_targets(&snapshot.current_user, &update)
            .await
    }

    /// Open the sheet of the clicked actor.
    pub async fn open_sheet(&self, actor_id: Option<&ActorId>) -> Result<(), PortError> {
        let Some(actor_id) = actor_id else {
            let error = HudError::invalid_target("portrait carries no actor id");
            tracing::warn!(error = %error, "Ignoring sheet request");
            return Ok(());
        };

        let snapshot = self.source.snapshot().await?;
        if !snapshot.actors.iter().any(|a| &a.id == actor_id) {
            let error = HudError::missing_actor(actor_id);
            tracing::warn!(error = %error, "Ignoring sheet request");
            return Ok(());
        }

        self.host.render_sheet(actor_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockHostActions, MockSnapshotSource};
    use mockall::predicate::*;
    use partyhud_domain::{Actor, HostSnapshot, Scene, TargetUpdate, Token, TokenId, UserId};

    fn table() -> HostSnapshot {
        let mut snapshot = HostSnapshot::new("u1");
        snapshot.actors = vec![Actor::new("orc", "Orc")];
        snapshot.scene = Some(Scene::new("s1").with_token(Token::new("o1", "Orc").with_actor("orc")));
        snapshot
    }

    fn source() -> Arc<MockSnapshotSource> {
        let mut source = MockSnapshotSource::new();
        source.expect_snapshot().returning(|| Ok(table()));
        Arc::new(source)
    }

    #[tokio::test]
    async fn targets_actor_tokens_for_current_user() {
        let mut host = MockHostActions::new();
        let expected = TargetUpdate {
            targets: vec![TokenId::new("o1")],
            release_others: true,
        };
        host.expect_update_targets()
            .with(eq(UserId::new("u1")), eq(expected))
            .times(1)
            .returning(|_, _| Ok(()));

        let actions = PortraitActions::new(source(), Arc::new(host));
        actions.target_actor(&ActorId::new("orc"), false).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_actor_target_is_a_no_op() {
        let mut host = MockHostActions::new();
        host.expect_update_targets().never();

        let actions = PortraitActions::new(source(), Arc::new(host));
        assert!(actions.target_actor(&ActorId::new("ghost"), true).await.is_ok());
    }

    #[tokio::test]
    async fn opens_sheet_for_known_actor() {
        let mut host = MockHostActions::new();
        host.expect_render_sheet()
            .with(eq(ActorId::new("orc")))
            .times(1)
            .returning(|_| Ok(()));

        let actions = PortraitActions::new(source(), Arc::new(host));
        actions.open_sheet(Some(&ActorId::new("orc"))).await.unwrap();
    }

    #[tokio::test]
    async fn sheet_request_without_valid_actor_is_a_no_op() {
        let mut host = MockHostActions::new();
        host.expect_render_sheet().never();

        let mut source = MockSnapshotSource::new();
        source.expect_snapshot().times(1).returning(|| Ok(table()));
        let actions = PortraitActions::new(Arc::new(source), Arc::new(host));

        // no id: the snapshot is never read
        assert!(actions.open_sheet(None).await.is_ok());
        assert!(actions.open_sheet(Some(&ActorId::new("ghost"))).await.is_ok());
    }

    #[tokio::test]
    async fn host_failures_propagate() {
        let mut host = MockHostActions::new();
        host.expect_render_sheet()
            .returning(|_| Err(PortError::host("render_sheet", "sheet locked")));

        let actions = PortraitActions::new(source(), Arc::new(host));
        let err = actions.open_sheet(Some(&ActorId::new("orc"))).await.unwrap_err();
        assert!(matches!(err, PortError::Host { .. }));
    }
}
