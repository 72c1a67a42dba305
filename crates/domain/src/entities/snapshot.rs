//! Host snapshot - everything one refresh is allowed to read
//!
//! A refresh computes its whole view from a single snapshot so party and
//! enemy lists never mix actor states taken at different times.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Actor, Combat, Scene, Token, User};
use crate::ids::{ActorId, TokenId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    /// When the host state was read; stamped by the snapshot source if absent
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    /// The acting user whose targets feed the enemy list
    pub current_user: UserId,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub combat: Option<Combat>,
    /// Active scene; no scene means no enemies
    #[serde(default)]
    pub scene: Option<Scene>,
    /// Token targets of the acting user, in targeting order
    #[serde(default)]
    pub targets: Vec<TokenId>,
}

impl HostSnapshot {
    pub fn new(current_user: impl Into<UserId>) -> Self {
        Self {
            captured_at: None,
            current_user: current_user.into(),
            users: Vec::new(),
            actors: Vec::new(),
            combat: None,
            scene: None,
            targets: Vec::new(),
        }
    }

    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// Build the id lookups used during one resolution pass
    pub fn index(&self) -> SnapshotIndex<'_> {
        SnapshotIndex {
            actors: self.actors.iter().map(|a| (&a.id, a)).collect(),
            tokens: self
                .scene
                .iter()
                .flat_map(|s| s.tokens.iter())
                .map(|t| (&t.id, t))
                .collect(),
        }
    }
}

/// Borrowed id lookups over a [`HostSnapshot`]
#[derive(Debug)]
pub struct SnapshotIndex<'a> {
    actors: HashMap<&'a ActorId, &'a Actor>,
    tokens: HashMap<&'a TokenId, &'a Token>,
}

impl<'a> SnapshotIndex<'a> {
    pub fn actor(&self, id: &ActorId) -> Option<&'a Actor> {
        self.actors.get(id).copied()
    }

    /// Placed token on the active scene
    pub fn token(&self, id: &TokenId) -> Option<&'a Token> {
        self.tokens.get(id).copied()
    }
}
