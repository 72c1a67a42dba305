//! Environment configuration.
//!
//! Supported environment variables:
//! - PARTYHUD_SYSTEM_ID: host game system id (default `generic`)
//! - PARTYHUD_PARTY_SETUP: `loggedin` or `all`
//! - PARTYHUD_SHOW_MODE: `always`, `combat` or `hidden`
//! - PARTYHUD_SIZE: panel size class (default `medium`)
//! - PARTYHUD_TRANSPARENT: transparent title box
//! - PARTYHUD_POP_OUT: free-floating panel instead of docked
//! - PARTYHUD_PRIMARY_ATTRIBUTE / PARTYHUD_SECONDARY_ATTRIBUTE: bar paths
//!   for the generic adapter
//! - PARTYHUD_SNAPSHOT_PATH: snapshot file read by the binary
//! - PARTYHUD_WATCH_INTERVAL_MS: re-read interval for watch mode
//!
//! An unrecognised show mode hides the party and an unrecognised party setup
//! means every user. Other invalid values are logged and ignored.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use partyhud_domain::game_systems::generic::DEFAULT_PRIMARY_ATTRIBUTE;
use partyhud_domain::{AdapterRegistry, GenericSystem, HudSettings, PartySetup, ShowMode};

pub const DEFAULT_SYSTEM_ID: &str = "generic";

#[derive(Debug, Clone, PartialEq)]
pub struct HudConfig {
    pub system_id: String,
    pub settings: HudSettings,
    pub pop_out: bool,
    pub primary_attribute: Option<String>,
    pub secondary_attribute: Option<String>,
    pub snapshot_path: Option<PathBuf>,
    pub watch_interval: Option<Duration>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            system_id: DEFAULT_SYSTEM_ID.to_string(),
            settings: HudSettings::default(),
            pop_out: false,
            primary_attribute: None,
            secondary_attribute: None,
            snapshot_path: None,
            watch_interval: None,
        }
    }
}

impl HudConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, one call per variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(system_id) = var("PARTYHUD_SYSTEM_ID") {
            config.system_id = system_id;
        }
        if let Some(val) = var("PARTYHUD_PARTY_SETUP") {
            config.settings.party_setup =
                parse_or_fallback("PARTYHUD_PARTY_SETUP", &val, PartySetup::All);
        }
        if let Some(val) = var("PARTYHUD_SHOW_MODE") {
            config.settings.show_mode =
                parse_or_fallback("PARTYHUD_SHOW_MODE", &val, ShowMode::Hidden);
        }
        if let Some(size) = var("PARTYHUD_SIZE") {
            config.settings.style.hud_size = size;
        }
        if let Some(transparent) = flag_or_warn("PARTYHUD_TRANSPARENT", var("PARTYHUD_TRANSPARENT")) {
            config.settings.style.transparent = transparent;
        }
        if let Some(pop_out) = flag_or_warn("PARTYHUD_POP_OUT", var("PARTYHUD_POP_OUT")) {
            config.pop_out = pop_out;
        }

        config.primary_attribute = var("PARTYHUD_PRIMARY_ATTRIBUTE");
        config.secondary_attribute = var("PARTYHUD_SECONDARY_ATTRIBUTE");
        config.snapshot_path = var("PARTYHUD_SNAPSHOT_PATH").map(PathBuf::from);

        if let Some(val) = var("PARTYHUD_WATCH_INTERVAL_MS") {
            match val.parse::<u64>() {
                Ok(ms) if ms > 0 => config.watch_interval = Some(Duration::from_millis(ms)),
                Ok(_) => tracing::warn!("PARTYHUD_WATCH_INTERVAL_MS is zero, watch mode disabled"),
                Err(_) => tracing::warn!(
                    val = %val,
                    "PARTYHUD_WATCH_INTERVAL_MS is not a valid u64, ignoring"
                ),
            }
        }

        config
    }

    /// Generic adapter configured with the attribute overrides.
    pub fn generic_system(&self) -> GenericSystem {
        let primary = self
            .primary_attribute
            .as_deref()
            .unwrap_or(DEFAULT_PRIMARY_ATTRIBUTE);
        GenericSystem::new(primary, self.secondary_attribute.clone())
    }

    /// Registry with every built-in adapter and the configured generic one.
    pub fn registry(&self) -> AdapterRegistry {
        AdapterRegistry::new(self.generic_system())
    }
}

/// Unrecognised enum values select `fallback` rather than the default, the
/// way the host reads these settings.
fn parse_or_fallback<T>(key: &str, value: &str, fallback: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().unwrap_or_else(|e| {
        tracing::warn!(key, val = %value, error = %e, fallback = %fallback, "Unrecognised setting");
        fallback
    })
}

fn flag_or_warn(key: &str, value: Option<String>) -> Option<bool> {
    let value = value?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(key, val = %value, "Invalid boolean setting, keeping default");
            None
        }
    }
}
