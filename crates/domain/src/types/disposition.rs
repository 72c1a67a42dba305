//! Token disposition
//!
//! The host's friend/neutral/hostile classification of a token. Only
//! `Friendly` matters for automatic party inclusion during combat.

use crate::error::HudError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Disposition of a placed token or of an actor's prototype token.
///
/// Hosts send either the lowercase name or the numeric constant
/// (`-2` secret, `-1` hostile, `0` neutral, `1` friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "RawDisposition")]
pub enum Disposition {
    Hostile,
    #[default]
    Neutral,
    Friendly,
    /// Hidden from players; never friendly
    Secret,
    /// Unknown disposition (for forward compatibility)
    Unknown,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDisposition {
    Code(i64),
    Name(String),
}

impl From<RawDisposition> for Disposition {
    fn from(raw: RawDisposition) -> Self {
        match raw {
            RawDisposition::Code(code) => Disposition::from_code(code),
            RawDisposition::Name(name) => name.parse().unwrap_or(Disposition::Unknown),
        }
    }
}

impl Disposition {
    /// Map the host's numeric disposition constant
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Disposition::Friendly,
            0 => Disposition::Neutral,
            -1 => Disposition::Hostile,
            -2 => Disposition::Secret,
            _ => Disposition::Unknown,
        }
    }

    pub fn is_friendly(&self) -> bool {
        matches!(self, Disposition::Friendly)
    }

    /// Get a display name for the disposition
    pub fn display_name(&self) -> &'static str {
        match self {
            Disposition::Hostile => "Hostile",
            Disposition::Neutral => "Neutral",
            Disposition::Friendly => "Friendly",
            Disposition::Secret => "Secret",
            Disposition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Disposition {
    type Err = HudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friendly" => Ok(Disposition::Friendly),
            "neutral" => Ok(Disposition::Neutral),
            "hostile" => Ok(Disposition::Hostile),
            "secret" => Ok(Disposition::Secret),
            other => Err(HudError::parse(format!("Unknown disposition: {}", other))),
        }
    }
}
