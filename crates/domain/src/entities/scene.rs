//! Scene entity - the active canvas and its placed tokens

use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::ids::{ActorId, SceneId, TokenId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl Scene {
    pub fn new(id: impl Into<SceneId>) -> Self {
        Self {
            id: id.into(),
            tokens: Vec::new(),
        }
    }

    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    pub fn token(&self, id: &TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| &t.id == id)
    }

    /// Tokens on this scene that represent the given actor
    pub fn active_tokens_of<'a>(&'a self, actor: &'a ActorId) -> impl Iterator<Item = &'a Token> {
        self.tokens
            .iter()
            .filter(move |t| t.actor.as_ref() == Some(actor))
    }
}
