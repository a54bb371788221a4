use std::collections::HashSet;

use crate::equipment::{Category, EquipmentId};
use crate::registry::RegistrySnapshot;

/// Whether `id` must be kept out of the random pool.
///
/// Known-unimplemented items are only allowed back in when an extension has
/// registered them. Anything else must follow the category naming convention,
/// which also drops leftovers from uninstalled extensions. Registration never
/// rescues a name that lacks the prefix.
pub fn is_excluded(id: &EquipmentId, snapshot: &RegistrySnapshot) -> bool {
    if id.is_unimplemented() {
        return !snapshot.contains(id);
    }
    !id.is_conformant()
}

pub fn weapon_is_excluded(name: &str, snapshot: &RegistrySnapshot) -> bool {
    is_excluded(&EquipmentId::weapon(name), snapshot)
}

pub fn charm_is_excluded(name: &str, snapshot: &RegistrySnapshot) -> bool {
    is_excluded(&EquipmentId::charm(name), snapshot)
}

pub fn super_is_excluded(name: &str, snapshot: &RegistrySnapshot) -> bool {
    is_excluded(&EquipmentId::super_(name), snapshot)
}

/// Drops repeated entries, keeping the first occurrence of each.
pub fn dedup(ids: &[EquipmentId]) -> Vec<EquipmentId> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

/// Deduplicated, eligible items out of `ids`, in first-seen order.
pub fn filter_pool(ids: &[EquipmentId], snapshot: &RegistrySnapshot) -> Vec<EquipmentId> {
    let mut pool = dedup(ids);
    pool.retain(|id| !is_excluded(id, snapshot));
    pool
}

/// Same filtering as selection uses, for callers listing items by name.
pub fn eligible_pool<I, S>(
    category: Category,
    names: I,
    snapshot: &RegistrySnapshot,
) -> Vec<EquipmentId>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ids: Vec<EquipmentId> = names
        .into_iter()
        .map(|name| EquipmentId::new(category, name))
        .collect();
    filter_pool(&ids, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(pool: &[EquipmentId]) -> Vec<&str> {
        pool.iter().map(EquipmentId::name).collect()
    }

    #[test]
    fn blacklisted_weapon_needs_registration() {
        let empty = RegistrySnapshot::new();
        assert!(weapon_is_excluded("level_weapon_arc", &empty));

        let registered = RegistrySnapshot::new().with_names(Category::Weapon, ["level_weapon_arc"]);
        assert!(!weapon_is_excluded("level_weapon_arc", &registered));
    }

    #[test]
    fn registration_in_another_category_does_not_rescue() {
        let snapshot = RegistrySnapshot::new().with_names(Category::Charm, ["level_weapon_arc"]);
        assert!(weapon_is_excluded("level_weapon_arc", &snapshot));
    }

    #[test]
    fn conformant_items_are_eligible_without_registration() {
        let empty = RegistrySnapshot::new();
        assert!(!weapon_is_excluded("level_weapon_peashot", &empty));
        assert!(!charm_is_excluded("charm_heart", &empty));
        assert!(!super_is_excluded("level_super_beam", &empty));
    }

    #[test]
    fn malformed_names_stay_excluded_even_when_registered() {
        let snapshot = RegistrySnapshot::new()
            .with_names(Category::Weapon, ["arc_plus"])
            .with_names(Category::Charm, ["None"])
            .with_names(Category::Super, ["plane_super_bomb"]);

        assert!(weapon_is_excluded("arc_plus", &snapshot));
        assert!(charm_is_excluded("None", &snapshot));
        assert!(super_is_excluded("plane_super_bomb", &snapshot));
    }

    #[test]
    fn unimplemented_supers_and_charms() {
        let empty = RegistrySnapshot::new();
        assert!(super_is_excluded("level_super_chalice_iii", &empty));
        assert!(super_is_excluded("level_super_chalice_bounce", &empty));
        assert!(charm_is_excluded("charm_EX", &empty));
        assert!(charm_is_excluded("charm_directional_dash", &empty));
    }

    #[test]
    fn eligible_pool_dedups_and_filters() {
        let pool = eligible_pool(
            Category::Weapon,
            [
                "level_weapon_chaser",
                "level_weapon_arc",
                "level_weapon_chaser",
                "plane_weapon_bomb",
                "level_weapon_charge",
            ],
            &RegistrySnapshot::new(),
        );
        assert_eq!(names(&pool), ["level_weapon_chaser", "level_weapon_charge"]);
    }

    fn weapon_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("level_weapon_arc".to_string()),
            Just("level_weapon_splitter".to_string()),
            Just("level_weapon_peashot".to_string()),
            Just("level_weapon_spreadshot".to_string()),
            Just("plane_weapon_peashot".to_string()),
            "[a-z_]{1,20}",
        ]
    }

    proptest! {
        #[test]
        fn filtering_twice_matches_filtering_once(
            raw in prop::collection::vec(weapon_name(), 0..24),
            registered in prop::collection::vec(weapon_name(), 0..4),
        ) {
            let snapshot = RegistrySnapshot::new().with_names(Category::Weapon, registered);
            let once = eligible_pool(Category::Weapon, raw.clone(), &snapshot);
            let twice = filter_pool(&once, &snapshot);
            prop_assert_eq!(&once, &twice);

            let distinct: HashSet<_> = once.iter().collect();
            prop_assert_eq!(distinct.len(), once.len());
        }

        #[test]
        fn non_conformant_names_ignore_the_registry(
            name in "[a-z]{1,8}_[a-z]{1,8}",
            extra in prop::collection::vec("[a-z_]{1,20}", 0..4),
        ) {
            prop_assume!(!name.starts_with("level_weapon_"));
            let snapshot = RegistrySnapshot::new()
                .with_names(Category::Weapon, extra)
                .with_names(Category::Weapon, [name.clone()]);
            prop_assert!(weapon_is_excluded(&name, &snapshot));
        }

        #[test]
        fn blacklist_follows_registry_membership(
            index in 0..crate::equipment::UNIMPLEMENTED_CHARMS.len(),
            registered in any::<bool>(),
        ) {
            let name = crate::equipment::UNIMPLEMENTED_CHARMS[index];
            let mut snapshot = RegistrySnapshot::new();
            if registered {
                snapshot = snapshot.with_names(Category::Charm, [name]);
            }
            prop_assert_eq!(charm_is_excluded(name, &snapshot), !registered);
        }
    }
}
