//! Portrait click targeting

use serde::{Deserialize, Serialize};

use crate::entities::HostSnapshot;
use crate::error::HudError;
use crate::ids::{ActorId, TokenId};

/// Target list the host should apply for the acting user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetUpdate {
    pub targets: Vec<TokenId>,
    /// Drop every target not in `targets`
    pub release_others: bool,
}

/// Work out the new targets after a click on an actor's portrait.
///
/// A plain click targets exactly the actor's tokens on the active scene. An
/// additive click untargets the actor's first token when it is already
/// targeted, otherwise appends all of its tokens to the current targets.
pub fn plan_target_update(
    snapshot: &HostSnapshot,
    actor_id: &ActorId,
    additive: bool,
) -> Result<TargetUpdate, HudError> {
    if !snapshot.actors.iter().any(|a| &a.id == actor_id) {
        return Err(HudError::missing_actor(actor_id));
    }

    let active: Vec<TokenId> = snapshot
        .scene
        .iter()
        .flat_map(|scene| scene.active_tokens_of(actor_id))
        .map(|token| token.id.clone())
        .collect();

    if !additive {
        return Ok(TargetUpdate {
            targets: active,
            release_others: true,
        });
    }

    let targets = match active.first() {
        Some(first) if snapshot.targets.contains(first) => snapshot
            .targets
            .iter()
            .filter(|id| *id != first)
            .cloned()
            .collect(),
        _ => {
            let mut targets = snapshot.targets.clone();
            for id in active {
                if !targets.contains(&id) {
                    targets.push(id);
                }
            }
            targets
        }
    };

    Ok(TargetUpdate {
        targets,
        release_others: false,
    })
}
