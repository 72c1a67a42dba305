//! Panel settings vocabulary
//!
//! Values are read once per refresh from whatever settings store the host
//! provides; these enums only describe what the values mean.

use crate::error::HudError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Party Setup
// ============================================================================

/// Which users contribute their characters to the party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartySetup {
    /// Only characters of currently logged-in users
    #[default]
    #[serde(rename = "loggedin")]
    LoggedIn,
    /// Characters of every user, active or not
    #[serde(other)]
    All,
}

impl fmt::Display for PartySetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartySetup::LoggedIn => write!(f, "loggedin"),
            PartySetup::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for PartySetup {
    type Err = HudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loggedin" | "logged_in" => Ok(PartySetup::LoggedIn),
            "all" | "everyone" => Ok(PartySetup::All),
            other => Err(HudError::parse(format!("Unknown party setup: {}", other))),
        }
    }
}

// ============================================================================
// Show Mode
// ============================================================================

/// When the party half of the panel is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShowMode {
    /// Every refresh
    #[default]
    Always,
    /// Only while combat is active
    Combat,
    /// Never; the party list stays empty
    #[serde(other)]
    Hidden,
}

impl ShowMode {
    /// Whether the party gate is open for this refresh
    pub fn shows_party(&self, in_combat: bool) -> bool {
        match self {
            ShowMode::Always => true,
            ShowMode::Combat => in_combat,
            ShowMode::Hidden => false,
        }
    }
}

impl fmt::Display for ShowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowMode::Always => write!(f, "always"),
            ShowMode::Combat => write!(f, "combat"),
            ShowMode::Hidden => write!(f, "hidden"),
        }
    }
}

impl std::str::FromStr for ShowMode {
    type Err = HudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(ShowMode::Always),
            "combat" => Ok(ShowMode::Combat),
            "hidden" | "never" | "off" => Ok(ShowMode::Hidden),
            other => Err(HudError::parse(format!("Unknown show mode: {}", other))),
        }
    }
}

// ============================================================================
// Panel Style
// ============================================================================

/// Rendering hints passed through to the view untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStyle {
    /// Size class consumed by the template (e.g. "medium")
    pub hud_size: String,
    /// Transparent title-box variant of the panel
    pub transparent: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            hud_size: "medium".to_string(),
            transparent: false,
        }
    }
}

impl PanelStyle {
    pub fn box_class(&self) -> &'static str {
        if self.transparent {
            "rpg-title-box"
        } else {
            "rpg-box"
        }
    }
}

// ============================================================================
// Settings bundle
// ============================================================================

/// Everything the view pipeline reads from settings for one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSettings {
    pub party_setup: PartySetup,
    pub show_mode: ShowMode,
    pub style: PanelStyle,
}
