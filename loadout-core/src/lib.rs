use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod equipment;
pub mod filter;
mod inventory;
mod loadout;
pub mod provider;
pub mod registry;
mod selector;

pub use equipment::{Category, EquipmentId};
pub use filter::{
    charm_is_excluded, eligible_pool, is_excluded, super_is_excluded, weapon_is_excluded,
};
pub use inventory::{Inventory, PlayerId};
pub use loadout::Loadout;
pub use provider::{ExtensionRegistry, InventoryProvider, LoadoutRandomiser, LoadoutStore};
pub use registry::{RegistryManifest, RegistrySnapshot};
pub use selector::compute_loadout;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomiserSettings {
    /// Fixed seed for reproducible rolls. Without one every run differs.
    pub seed: Option<u64>,
}

impl RandomiserSettings {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RandomiserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("unknown equipment category: {0}")]
    UnknownCategory(String),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("no saved data for {0}")]
    MissingPlayer(PlayerId),
}

pub type Result<T> = std::result::Result<T, RandomiserError>;
