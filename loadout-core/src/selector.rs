use rand::Rng;
use tracing::debug;

use crate::equipment::{Category, EquipmentId, CHALICE_SUPERS, NON_CHALICE_SUPERS};
use crate::filter::filter_pool;
use crate::inventory::Inventory;
use crate::loadout::Loadout;
use crate::registry::RegistrySnapshot;

/// Removes and returns a uniformly chosen element, or `None` for an empty pool.
fn draw<R: Rng + ?Sized>(pool: &mut Vec<EquipmentId>, rng: &mut R) -> Option<EquipmentId> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

fn assign(slot: &mut Option<EquipmentId>, pick: Option<EquipmentId>, name: &str) {
    match pick {
        Some(id) => *slot = Some(id),
        None => debug!(slot = name, "no eligible items, keeping previous value"),
    }
}

/// Picks a random loadout out of `inventory`, starting from `prior`.
///
/// Each slot whose eligible pool is empty keeps its value from `prior`. The
/// two weapons are always distinct. A super drawn in this call suits the
/// charm the returned loadout carries; when no compatible super is owned the
/// previous super stays, even if it no longer matches that charm.
pub fn compute_loadout<R: Rng + ?Sized>(
    inventory: &Inventory,
    snapshot: &RegistrySnapshot,
    prior: &Loadout,
    rng: &mut R,
) -> Loadout {
    let mut loadout = prior.clone();

    let mut weapons = filter_pool(inventory.owned(Category::Weapon), snapshot);
    let mut charms = filter_pool(inventory.owned(Category::Charm), snapshot);
    let mut supers = filter_pool(inventory.owned(Category::Super), snapshot);
    debug!(
        weapons = weapons.len(),
        charms = charms.len(),
        supers = supers.len(),
        "eligible pools"
    );

    // Primary is taken out of the pool before the secondary draw.
    assign(&mut loadout.primary_weapon, draw(&mut weapons, rng), "primary_weapon");
    assign(&mut loadout.secondary_weapon, draw(&mut weapons, rng), "secondary_weapon");

    assign(&mut loadout.charm, draw(&mut charms, rng), "charm");

    if !supers.is_empty() {
        let incompatible = if loadout.has_chalice_charm() {
            NON_CHALICE_SUPERS
        } else {
            CHALICE_SUPERS
        };
        supers.retain(|id| !incompatible.contains(&id.name()));
    }
    assign(&mut loadout.super_, draw(&mut supers, rng), "super");

    loadout
}
