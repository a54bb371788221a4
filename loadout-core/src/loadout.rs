use std::fmt;

use crate::equipment::EquipmentId;

/// The four equipment slots of a player. `None` means the slot was never set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Loadout {
    pub primary_weapon: Option<EquipmentId>,
    pub secondary_weapon: Option<EquipmentId>,
    pub charm: Option<EquipmentId>,
    pub super_: Option<EquipmentId>,
}

impl Loadout {
    pub fn has_chalice_charm(&self) -> bool {
        self.charm.as_ref().is_some_and(EquipmentId::is_chalice_charm)
    }
}

fn slot(id: &Option<EquipmentId>) -> &str {
    id.as_ref().map_or("-", EquipmentId::name)
}

impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "primary:   {}", slot(&self.primary_weapon))?;
        writeln!(f, "secondary: {}", slot(&self.secondary_weapon))?;
        writeln!(f, "charm:     {}", slot(&self.charm))?;
        write!(f, "super:     {}", slot(&self.super_))
    }
}
