//! User entity - a person connected to the host

use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    /// Currently logged in
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_gm: bool,
    /// Assigned character, if any
    #[serde(default)]
    pub character: Option<ActorId>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: false,
            is_gm: false,
            character: None,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn gm(mut self) -> Self {
        self.is_gm = true;
        self
    }

    pub fn with_character(mut self, actor: impl Into<ActorId>) -> Self {
        self.character = Some(actor.into());
        self
    }
}
