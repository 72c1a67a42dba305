//! Application state and composition.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use partyhud_domain::{HudSettings, HudView};
use tokio::sync::RwLock;

use crate::infrastructure::config::HudConfig;
use crate::infrastructure::ports::{HostActions, SettingsRepo, SnapshotSource, UiAnchor};
use crate::use_cases::{PlacePanel, PortraitActions, RefreshError, RefreshHud};

static INSTANCE: OnceCell<Arc<PartyHud>> = OnceCell::new();

/// Host-side dependencies of the HUD.
pub struct HudPorts {
    pub snapshots: Arc<dyn SnapshotSource>,
    pub host: Arc<dyn HostActions>,
    pub settings: Arc<dyn SettingsRepo>,
    pub anchor: Arc<dyn UiAnchor>,
}

/// Container for all use cases.
pub struct UseCases {
    pub refresh: RefreshHud,
    pub actions: PortraitActions,
    pub position: PlacePanel,
}

/// The HUD panel: current settings, visibility and its use cases.
pub struct PartyHud {
    pub use_cases: UseCases,
    settings: RwLock<HudSettings>,
    visible: AtomicBool,
}

impl PartyHud {
    /// Create a new HUD with all dependencies wired up.
    pub fn new(config: &HudConfig, ports: HudPorts) -> Self {
        let adapter = config.registry().resolve(&config.system_id);
        tracing::info!(
            system_id = %config.system_id,
            adapter = adapter.system_id(),
            "Party HUD configured"
        );

        let use_cases = UseCases {
            refresh: RefreshHud::new(ports.snapshots.clone(), adapter),
            actions: PortraitActions::new(ports.snapshots, ports.host),
            position: PlacePanel::new(ports.settings, ports.anchor, config.pop_out),
        };

        Self {
            use_cases,
            settings: RwLock::new(config.settings.clone()),
            visible: AtomicBool::new(true),
        }
    }

    /// Create the process-wide HUD. Later calls return the first instance
    /// and drop their arguments.
    pub fn init(config: &HudConfig, ports: HudPorts) -> Arc<PartyHud> {
        INSTANCE
            .get_or_init(|| Arc::new(Self::new(config, ports)))
            .clone()
    }

    /// The process-wide HUD, if [`PartyHud::init`] has run.
    pub fn get() -> Option<Arc<PartyHud>> {
        INSTANCE.get().cloned()
    }

    /// Compute the current view, or `None` while the panel is hidden.
    pub async fn render(&self) -> Result<Option<HudView>, RefreshError> {
        if !self.is_visible() {
            tracing::debug!("Panel hidden, skipping render");
            return Ok(None);
        }
        let settings = self.settings.read().await.clone();
        self.use_cases.refresh.execute(&settings).await.map(Some)
    }

    /// Show or hide the panel; returns the new visibility.
    pub fn toggle(&self) -> bool {
        let visible = !self.visible.fetch_xor(true, Ordering::SeqCst);
        tracing::info!(visible, "Panel visibility toggled");
        visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Replace the settings used by subsequent renders.
    pub async fn update_settings(&self, settings: HudSettings) {
        *self.settings.write().await = settings;
    }

    pub async fn settings(&self) -> HudSettings {
        self.settings.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::HeadlessHost;
    use crate::infrastructure::ports::MockSnapshotSource;
    use crate::infrastructure::settings::InMemorySettingsRepo;
    use partyhud_domain::{Actor, HostSnapshot, ShowMode, User};
    use serde_json::json;

    fn ports() -> HudPorts {
        let mut source = MockSnapshotSource::new();
        source.expect_snapshot().returning(|| {
            let mut snapshot = HostSnapshot::new("u1");
            snapshot.actors = vec![Actor::new("hero", "Hero")
                .with_system(json!({"attributes": {"hp": {"value": 4, "max": 8}}}))];
            snapshot.users = vec![User::new("u1", "Ann").active().with_character("hero")];
            Ok(snapshot)
        });
        HudPorts {
            snapshots: Arc::new(source),
            host: Arc::new(HeadlessHost),
            settings: Arc::new(InMemorySettingsRepo::new()),
            anchor: Arc::new(HeadlessHost),
        }
    }

    #[tokio::test]
    async fn hidden_panel_renders_nothing() {
        let hud = PartyHud::new(&HudConfig::default(), ports());

        assert!(hud.render().await.unwrap().is_some());
        assert!(!hud.toggle());
        assert!(hud.render().await.unwrap().is_none());
        assert!(hud.toggle());
        assert!(hud.is_visible());
    }

    #[tokio::test]
    async fn configured_system_selects_adapter() {
        let config = HudConfig {
            system_id: "pf2e".into(),
            ..HudConfig::default()
        };
        let hud = PartyHud::new(&config, ports());
        assert_eq!(hud.use_cases.refresh.adapter().system_id(), "pf2e");

        let view = hud.render().await.unwrap().unwrap();
        assert_eq!(view.party[0].primary.percent, 50);
    }

    #[tokio::test]
    async fn settings_updates_apply_to_next_render() {
        let hud = PartyHud::new(&HudConfig::default(), ports());
        hud.update_settings(HudSettings {
            show_mode: ShowMode::Hidden,
            ..HudSettings::default()
        })
        .await;

        let view = hud.render().await.unwrap().unwrap();
        assert!(view.party.is_empty());
        assert_eq!(hud.settings().await.show_mode, ShowMode::Hidden);
    }

    #[test]
    fn init_returns_the_first_instance() {
        let first = PartyHud::init(&HudConfig::default(), ports());
        let config = HudConfig {
            system_id: "dnd5e".into(),
            ..HudConfig::default()
        };
        let second = PartyHud::init(&config, ports());

        assert!(Arc::ptr_eq(&first, &second));
        assert!(PartyHud::get().is_some_and(|hud| Arc::ptr_eq(&hud, &first)));
        assert_eq!(first.use_cases.refresh.adapter().system_id(), "generic");
    }
}
