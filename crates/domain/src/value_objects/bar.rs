//! Normalized resource gauge

use serde::{Deserialize, Serialize};

use super::attribute::ResourceValues;

/// Theme tag for health-like bars
pub const THEME_HP: &str = "rpg-t-hp";
/// Theme tag for every other resource
pub const THEME_MP: &str = "rpg-t-mp";

/// A resource gauge in the uniform display schema.
///
/// `percent` and `bonus_percent` are zero/absent until the derived-stat
/// calculator has run over the bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub name: String,
    pub value: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub percent: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_percent: Option<u8>,
}

impl Bar {
    pub fn new(name: impl Into<String>, values: ResourceValues) -> Self {
        Self {
            name: name.into(),
            value: values.value,
            max: values.max,
            temp: values.temp,
            theme: None,
            percent: 0,
            bonus_percent: None,
        }
    }

    /// Stand-in for an attribute that could not be resolved
    pub fn zero(name: impl Into<String>) -> Self {
        Self::new(name, ResourceValues::default())
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Temporary points, treating absence as zero
    pub fn temp_or_zero(&self) -> f64 {
        self.temp.unwrap_or(0.0)
    }

    /// Whether temporary points are present and non-zero
    pub fn has_temp(&self) -> bool {
        self.temp.is_some_and(|t| t != 0.0)
    }
}
