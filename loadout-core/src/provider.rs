//! Seams to the host that owns player data and extension loading.
//!
//! The randomiser only reads through these traits. Storing the loadout it
//! returns is left to the caller.

use rand::rngs::StdRng;
use tracing::info;

use crate::inventory::{Inventory, PlayerId};
use crate::loadout::Loadout;
use crate::registry::RegistrySnapshot;
use crate::selector::compute_loadout;
use crate::{RandomiserSettings, Result};

pub trait InventoryProvider {
    /// Unlocked items for `player`. Duplicates are allowed.
    fn inventory(&self, player: PlayerId) -> Result<Inventory>;
}

pub trait ExtensionRegistry {
    /// Names currently registered by loaded extensions.
    fn snapshot(&self) -> RegistrySnapshot;
}

pub trait LoadoutStore {
    /// The loadout `player` has equipped right now.
    fn loadout(&self, player: PlayerId) -> Result<Loadout>;
}

impl ExtensionRegistry for RegistrySnapshot {
    fn snapshot(&self) -> RegistrySnapshot {
        self.clone()
    }
}

pub struct LoadoutRandomiser<'a> {
    inventories: &'a dyn InventoryProvider,
    registry: &'a dyn ExtensionRegistry,
    loadouts: &'a dyn LoadoutStore,
    rng: StdRng,
}

impl<'a> LoadoutRandomiser<'a> {
    pub fn new(
        inventories: &'a dyn InventoryProvider,
        registry: &'a dyn ExtensionRegistry,
        loadouts: &'a dyn LoadoutStore,
        settings: &RandomiserSettings,
    ) -> Self {
        Self {
            inventories,
            registry,
            loadouts,
            rng: settings.rng(),
        }
    }

    /// Rolls a fresh loadout for `player`. Every call is independent; only
    /// errors from the providers are returned.
    pub fn randomize(&mut self, player: PlayerId) -> Result<Loadout> {
        let inventory = self.inventories.inventory(player)?;
        let prior = self.loadouts.loadout(player)?;
        let snapshot = self.registry.snapshot();

        let loadout = compute_loadout(&inventory, &snapshot, &prior, &mut self.rng);
        info!(
            %player,
            primary = ?loadout.primary_weapon.as_ref().map(|id| id.name()),
            secondary = ?loadout.secondary_weapon.as_ref().map(|id| id.name()),
            charm = ?loadout.charm.as_ref().map(|id| id.name()),
            super_ = ?loadout.super_.as_ref().map(|id| id.name()),
            "randomized loadout"
        );
        Ok(loadout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{Category, EquipmentId};
    use crate::RandomiserError;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct Players {
        inventories: HashMap<PlayerId, Inventory>,
        loadouts: HashMap<PlayerId, Loadout>,
    }

    impl InventoryProvider for Players {
        fn inventory(&self, player: PlayerId) -> Result<Inventory> {
            self.inventories
                .get(&player)
                .cloned()
                .ok_or(RandomiserError::MissingPlayer(player))
        }
    }

    impl LoadoutStore for Players {
        fn loadout(&self, player: PlayerId) -> Result<Loadout> {
            Ok(self.loadouts.get(&player).cloned().unwrap_or_default())
        }
    }

    /// Registry whose contents change between snapshots.
    struct Toggling {
        calls: Cell<u32>,
    }

    impl ExtensionRegistry for Toggling {
        fn snapshot(&self) -> RegistrySnapshot {
            let calls = self.calls.get();
            self.calls.set(calls + 1);
            if calls % 2 == 0 {
                RegistrySnapshot::new()
            } else {
                RegistrySnapshot::new().with_names(Category::Weapon, ["level_weapon_arc"])
            }
        }
    }

    fn players() -> Players {
        let mut inventories = HashMap::new();
        inventories.insert(
            PlayerId::One,
            Inventory::from_names(
                ["level_weapon_arc"],
                ["charm_heart", "charm_heart"],
                ["level_super_beam"],
            ),
        );
        let mut loadouts = HashMap::new();
        loadouts.insert(
            PlayerId::One,
            Loadout {
                primary_weapon: Some(EquipmentId::weapon("level_weapon_peashot")),
                ..Loadout::default()
            },
        );
        Players {
            inventories,
            loadouts,
        }
    }

    #[test]
    fn each_call_takes_a_new_registry_snapshot() {
        let players = players();
        let registry = Toggling { calls: Cell::new(0) };
        let settings = RandomiserSettings { seed: Some(4) };
        let mut randomiser = LoadoutRandomiser::new(&players, &registry, &players, &settings);

        let first = randomiser.randomize(PlayerId::One).unwrap();
        assert_eq!(
            first.primary_weapon.as_ref().map(EquipmentId::name),
            Some("level_weapon_peashot")
        );

        let second = randomiser.randomize(PlayerId::One).unwrap();
        assert_eq!(
            second.primary_weapon.as_ref().map(EquipmentId::name),
            Some("level_weapon_arc")
        );
        assert_eq!(second.charm.as_ref().map(EquipmentId::name), Some("charm_heart"));
        assert_eq!(second.super_.as_ref().map(EquipmentId::name), Some("level_super_beam"));
    }

    #[test]
    fn missing_player_is_reported() {
        let players = players();
        let registry = RegistrySnapshot::new();
        let mut randomiser =
            LoadoutRandomiser::new(&players, &registry, &players, &RandomiserSettings::default());

        let err = randomiser.randomize(PlayerId::Two).unwrap_err();
        assert!(matches!(err, RandomiserError::MissingPlayer(PlayerId::Two)));
    }
}
