use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use loadout_core::{
    Category, EquipmentId, Inventory, InventoryProvider, Loadout, LoadoutStore, PlayerId,
    RandomiserError, Result,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedInventory {
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub charms: Vec<String>,
    #[serde(default)]
    pub supers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLoadout {
    #[serde(default)]
    pub primary_weapon: Option<String>,
    #[serde(default)]
    pub secondary_weapon: Option<String>,
    #[serde(default)]
    pub charm: Option<String>,
    #[serde(default, rename = "super")]
    pub super_: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub inventory: SavedInventory,
    #[serde(default)]
    pub loadout: SavedLoadout,
}

/// Player data as stored on disk, keyed by `"one"` / `"two"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub players: HashMap<PlayerId, PlayerRecord>,
}

fn tagged(category: Category, name: &Option<String>) -> Option<EquipmentId> {
    name.as_ref().map(|n| EquipmentId::new(category, n.clone()))
}

fn raw(id: &Option<EquipmentId>) -> Option<String> {
    id.as_ref().map(|id| id.name().to_string())
}

impl From<&SavedLoadout> for Loadout {
    fn from(saved: &SavedLoadout) -> Self {
        Loadout {
            primary_weapon: tagged(Category::Weapon, &saved.primary_weapon),
            secondary_weapon: tagged(Category::Weapon, &saved.secondary_weapon),
            charm: tagged(Category::Charm, &saved.charm),
            super_: tagged(Category::Super, &saved.super_),
        }
    }
}

impl From<&Loadout> for SavedLoadout {
    fn from(loadout: &Loadout) -> Self {
        SavedLoadout {
            primary_weapon: raw(&loadout.primary_weapon),
            secondary_weapon: raw(&loadout.secondary_weapon),
            charm: raw(&loadout.charm),
            super_: raw(&loadout.super_),
        }
    }
}

impl SaveFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn player(&self, player: PlayerId) -> Result<&PlayerRecord> {
        self.players
            .get(&player)
            .ok_or(RandomiserError::MissingPlayer(player))
    }

    pub fn set_loadout(&mut self, player: PlayerId, loadout: &Loadout) {
        self.players
            .entry(player)
            .or_default()
            .loadout = loadout.into();
    }
}

impl InventoryProvider for SaveFile {
    fn inventory(&self, player: PlayerId) -> Result<Inventory> {
        let saved = &self.player(player)?.inventory;
        Ok(Inventory::from_names(
            saved.weapons.iter().cloned(),
            saved.charms.iter().cloned(),
            saved.supers.iter().cloned(),
        ))
    }
}

impl LoadoutStore for SaveFile {
    fn loadout(&self, player: PlayerId) -> Result<Loadout> {
        Ok((&self.player(player)?.loadout).into())
    }
}
