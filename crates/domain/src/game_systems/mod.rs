//! Game system adapters.
//!
//! Each supported tabletop system implements [`SystemAdapter`] and is
//! registered in the [`AdapterRegistry`]. The adapter for a host is chosen once
//! at startup from its system identifier; unknown systems get the generic one.
//!
//! # Supported Systems
//!
//! - 13th Age (`archmage`)
//! - D&D 5th Edition (`dnd5e`)
//! - Pathfinder 2e (`pf2e`)
//! - Savage Worlds Adventure Edition (`swade`)
//! - Fabula Ultima (`fabulaultima`)
//! - anything else (`generic`)

mod archmage;
mod dnd5e;
mod fabula;
pub mod generic;
mod pf2e;
mod swade;
mod traits;
mod turn_order;

pub use archmage::ArchmageSystem;
pub use dnd5e::Dnd5eSystem;
pub use fabula::FabulaSystem;
pub use generic::GenericSystem;
pub use pf2e::Pf2eSystem;
pub use swade::SwadeSystem;
pub use traits::SystemAdapter;
pub use turn_order::sequence_by_turn_order;

use std::sync::Arc;

use crate::error::HudError;

/// Registry of available game system adapters.
pub struct AdapterRegistry {
    systems: Vec<Arc<dyn SystemAdapter>>,
    fallback: Arc<dyn SystemAdapter>,
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new(GenericSystem::default())
    }
}

impl AdapterRegistry {
    /// Create a registry with all built-in adapters. `generic` serves every
    /// system without a dedicated adapter.
    pub fn new(generic: GenericSystem) -> Self {
        let mut registry = Self::empty(generic);
        // Register built-in systems
        registry.register(Arc::new(ArchmageSystem::new()));
        registry.register(Arc::new(Dnd5eSystem::new()));
        registry.register(Arc::new(Pf2eSystem::new()));
        registry.register(Arc::new(SwadeSystem::new()));
        registry.register(Arc::new(FabulaSystem::new()));
        registry
    }

    /// Create a registry holding only the generic adapter.
    pub fn empty(generic: GenericSystem) -> Self {
        let fallback: Arc<dyn SystemAdapter> = Arc::new(generic);
        Self {
            systems: vec![fallback.clone()],
            fallback,
        }
    }

    /// Register an adapter. A later registration shadows an earlier one with
    /// the same id.
    pub fn register(&mut self, system: Arc<dyn SystemAdapter>) {
        self.systems.retain(|s| s.system_id() != system.system_id());
        self.systems.push(system);
    }

    /// Get the adapter registered for a system id.
    pub fn get(&self, system_id: &str) -> Result<Arc<dyn SystemAdapter>, HudError> {
        self.systems
            .iter()
            .find(|s| s.system_id() == system_id)
            .cloned()
            .ok_or_else(|| HudError::unknown_system(system_id))
    }

    /// Get the adapter for a system id, falling back to the generic adapter.
    pub fn resolve(&self, system_id: &str) -> Arc<dyn SystemAdapter> {
        match self.get(system_id) {
            Ok(system) => system,
            Err(error) => {
                tracing::info!(
                    system_id,
                    error = %error,
                    "No specific system adapter found, using the generic one"
                );
                self.fallback.clone()
            }
        }
    }

    /// List all registered system IDs.
    pub fn list_systems(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.system_id()).collect()
    }

    /// List all registered systems with their display names.
    pub fn list_systems_with_names(&self) -> Vec<(&str, &str)> {
        self.systems
            .iter()
            .map(|s| (s.system_id(), s.display_name()))
            .collect()
    }
}
