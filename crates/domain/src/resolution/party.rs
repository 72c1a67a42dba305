//! Party resolution.
//!
//! The party is every character assigned to a user (only logged-in users
//! under [`PartySetup::LoggedIn`]) plus, during combat, every combatant whose
//! token resolves to a friendly disposition. Each actor appears once, at the
//! position it was first seen.

use std::collections::HashSet;

use crate::derived;
use crate::entities::{Actor, Combatant, HostSnapshot, SnapshotIndex};
use crate::game_systems::SystemAdapter;
use crate::ids::ActorId;
use crate::types::{Disposition, PartySetup, PartySize};
use crate::value_objects::NormalizedEntry;

/// Translated party with its header classification
#[derive(Debug, Clone, PartialEq)]
pub struct Party {
    pub members: Vec<NormalizedEntry>,
    pub size: PartySize,
}

impl Party {
    /// Actor ids of the members, used to keep them out of the enemy list
    pub fn member_ids(&self) -> HashSet<&str> {
        self.members.iter().map(|m| m.id.as_str()).collect()
    }
}

/// Disposition of a combatant: the placed token it is attached to, else
/// the actor's placed token, else the actor's prototype token
pub fn effective_disposition(
    combatant: &Combatant,
    actor: &Actor,
    index: &SnapshotIndex<'_>,
) -> Disposition {
    combatant
        .token
        .as_ref()
        .and_then(|id| index.token(id))
        .or_else(|| actor.token.as_ref().and_then(|id| index.token(id)))
        .map(|token| token.disposition)
        .unwrap_or(actor.prototype_token.disposition)
}

/// Resolve the actors that make up the party, deduplicated by identity.
pub fn resolve_party_members<'a>(
    snapshot: &'a HostSnapshot,
    index: &SnapshotIndex<'a>,
    setup: PartySetup,
) -> Vec<&'a Actor> {
    let mut seen: HashSet<&ActorId> = HashSet::new();
    let mut members: Vec<&'a Actor> = Vec::new();
    let mut admit = |actor: &'a Actor| {
        if seen.insert(&actor.id) {
            members.push(actor);
        }
    };

    let users = snapshot
        .users
        .iter()
        .filter(|u| setup != PartySetup::LoggedIn || u.active);
    for user in users {
        let Some(character) = user.character.as_ref() else {
            continue;
        };
        match index.actor(character) {
            Some(actor) => admit(actor),
            None => tracing::debug!(user_id = %user.id, actor_id = %character, "Assigned character not in snapshot"),
        }
    }

    if let Some(combat) = snapshot.combat.as_ref() {
        for combatant in &combat.combatants {
            let Some(actor) = combatant.actor.as_ref().and_then(|id| index.actor(id)) else {
                continue;
            };
            if effective_disposition(combatant, actor, index).is_friendly() {
                admit(actor);
            }
        }
    }

    members
}

/// Resolve, translate and decorate the party for one refresh.
///
/// Bars get their party percentages, combat applies the adapter's initiative
/// order, and `show_effects` is raised on every member when any member has
/// an effect.
pub fn build_party(
    adapter: &dyn SystemAdapter,
    snapshot: &HostSnapshot,
    index: &SnapshotIndex<'_>,
    setup: PartySetup,
) -> Party {
    let mut members: Vec<NormalizedEntry> = resolve_party_members(snapshot, index, setup)
        .into_iter()
        .map(|actor| adapter.translate_party_actor(actor))
        .collect();

    for member in members.iter_mut() {
        derived::apply_party(member);
    }

    if let Some(combat) = snapshot.combat.as_ref() {
        members = adapter.set_initiatives(members, combat);
    }

    let show_effects = members.iter().any(|m| !m.effects.is_empty());
    for member in members.iter_mut() {
        member.show_effects = show_effects;
    }

    let size = PartySize::classify(members.len());
    Party { members, size }
}
