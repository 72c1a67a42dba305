//! Enemy resolution.

use std::collections::HashSet;

use crate::derived;
use crate::entities::{HostSnapshot, SnapshotIndex, Token};
use crate::game_systems::SystemAdapter;
use crate::ids::TokenId;
use crate::value_objects::NormalizedEntry;

/// Tokens shown as enemies: the acting user's targets whose actor is not in
/// the party, then every boss-flagged scene token.
///
/// No disposition filter applies here. A token that is both targeted and a
/// boss appears once, at its target position. Without an active scene the
/// result is empty.
pub fn resolve_enemy_tokens<'a>(
    snapshot: &'a HostSnapshot,
    index: &SnapshotIndex<'a>,
    party_ids: &HashSet<&str>,
) -> Vec<&'a Token> {
    let Some(scene) = snapshot.scene.as_ref() else {
        return Vec::new();
    };

    let mut seen: HashSet<&TokenId> = HashSet::new();
    let mut tokens: Vec<&'a Token> = Vec::new();

    for target in &snapshot.targets {
        let Some(token) = index.token(target) else {
            tracing::debug!(token_id = %target, "Target not on the active scene");
            continue;
        };
        let in_party = token
            .actor
            .as_ref()
            .is_some_and(|actor| party_ids.contains(actor.as_str()));
        if !in_party && seen.insert(&token.id) {
            tokens.push(token);
        }
    }

    for token in scene.tokens.iter().filter(|t| t.is_boss()) {
        if seen.insert(&token.id) {
            tokens.push(token);
        }
    }

    tokens
}

/// Resolve and translate the enemy list with enemy percentages applied.
pub fn build_enemies(
    adapter: &dyn SystemAdapter,
    snapshot: &HostSnapshot,
    index: &SnapshotIndex<'_>,
    party_ids: &HashSet<&str>,
) -> Vec<NormalizedEntry> {
    resolve_enemy_tokens(snapshot, index, party_ids)
        .into_iter()
        .map(|token| {
            let actor = token.actor.as_ref().and_then(|id| index.actor(id));
            let mut entry = adapter.translate_enemy_token(token, actor);
            derived::apply_enemy(&mut entry);
            entry
        })
        .collect()
}
