//! View assembly - the structure handed to the rendering layer each refresh

use serde::{Deserialize, Serialize};

use crate::entities::HostSnapshot;
use crate::game_systems::SystemAdapter;
use crate::resolution::{build_enemies, build_party};
use crate::types::{HudSettings, PartySize};
use crate::value_objects::NormalizedEntry;

/// Party and enemy lists plus the presentation hints for one refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HudView {
    pub party: Vec<NormalizedEntry>,
    /// Header label; absent when the display mode hides the party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<PartySize>,
    pub enemies: Vec<NormalizedEntry>,
    pub hud_size: String,
    pub box_class: String,
}

impl HudView {
    /// Actor ids of the party members in display order
    pub fn party_ids(&self) -> Vec<String> {
        self.party.iter().map(|m| m.id.clone()).collect()
    }
}

/// Compute the whole view from one snapshot.
///
/// Party and enemies read the same snapshot and index, so one view never
/// mixes states. When the display mode hides the party, the party is empty
/// and no actor is excluded from the enemies.
pub fn build_view(adapter: &dyn SystemAdapter, snapshot: &HostSnapshot, settings: &HudSettings) -> HudView {
    let index = snapshot.index();

    let party = settings
        .show_mode
        .shows_party(snapshot.in_combat())
        .then(|| build_party(adapter, snapshot, &index, settings.party_setup));

    let enemies = {
        let party_ids = party.as_ref().map(|p| p.member_ids()).unwrap_or_default();
        build_enemies(adapter, snapshot, &index, &party_ids)
    };

    let (party, party_size) = match party {
        Some(party) => (party.members, Some(party.size)),
        None => (Vec::new(), None),
    };

    tracing::debug!(
        system_id = adapter.system_id(),
        party = party.len(),
        enemies = enemies.len(),
        "Built HUD view"
    );

    HudView {
        party,
        party_size,
        enemies,
        hud_size: settings.style.hud_size.clone(),
        box_class: settings.style.box_class().to_string(),
    }
}
