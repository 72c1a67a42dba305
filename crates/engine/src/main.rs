//! Party HUD Engine - renders host snapshots to HUD view JSON.
//!
//! Usage: `partyhud-engine [SNAPSHOT_PATH]`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use partyhud_engine::infrastructure::{
    clock::SystemClock, config::HudConfig, headless::HeadlessHost,
    settings::InMemorySettingsRepo, snapshot_file::JsonFileSnapshotSource,
};
use partyhud_engine::{HudPorts, PartyHud};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partyhud_engine=info,partyhud_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = HudConfig::from_env();
    let snapshot_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.snapshot_path.clone())
        .context("no snapshot file given (argument or PARTYHUD_SNAPSHOT_PATH)")?;

    tracing::info!(path = %snapshot_path.display(), "Starting Party HUD Engine");

    let ports = HudPorts {
        snapshots: Arc::new(JsonFileSnapshotSource::new(
            snapshot_path,
            Arc::new(SystemClock),
        )),
        host: Arc::new(HeadlessHost),
        settings: Arc::new(InMemorySettingsRepo::new()),
        anchor: Arc::new(HeadlessHost),
    };
    let hud = PartyHud::init(&config, ports);

    let Some(interval) = config.watch_interval else {
        let view = hud.render().await?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    };

    tracing::info!(interval_ms = interval.as_millis() as u64, "Watching snapshot file");
    let mut last: Option<String> = None;
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                return Ok(());
            }
        }

        let view = match hud.render().await {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(error = %e, "Refresh failed, keeping last view");
                continue;
            }
        };
        let rendered = serde_json::to_string_pretty(&view)?;
        if last.as_deref() != Some(rendered.as_str()) {
            println!("{rendered}");
            last = Some(rendered);
        }
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
