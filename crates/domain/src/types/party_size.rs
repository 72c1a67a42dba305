//! Party size classification shown in the panel header.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartySize {
    #[serde(rename = "Solo")]
    Solo,
    #[serde(rename = "Duo")]
    Duo,
    #[serde(rename = "Light Party")]
    LightParty,
    #[serde(rename = "Full Party")]
    FullParty,
    #[serde(rename = "Alliance")]
    Alliance,
}

impl PartySize {
    /// Classify a party by member count.
    ///
    /// An empty party falls into `LightParty`; the thresholds are checked in
    /// order and zero is not special-cased.
    pub fn classify(count: usize) -> Self {
        match count {
            1 => PartySize::Solo,
            2 => PartySize::Duo,
            0..=4 => PartySize::LightParty,
            5..=8 => PartySize::FullParty,
            _ => PartySize::Alliance,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartySize::Solo => "Solo",
            PartySize::Duo => "Duo",
            PartySize::LightParty => "Light Party",
            PartySize::FullParty => "Full Party",
            PartySize::Alliance => "Alliance",
        }
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
