use std::fmt;
use std::str::FromStr;

use crate::RandomiserError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Weapon,
    Charm,
    Super,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Weapon, Category::Charm, Category::Super];

    /// Every implemented item of this category is named with this prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Weapon => "level_weapon_",
            Category::Charm => "charm_",
            Category::Super => "level_super_",
        }
    }

    /// Items the base game lists but never finished. Selecting one of these
    /// leaves the player with a broken slot unless an extension provides it.
    pub fn unimplemented(self) -> &'static [&'static str] {
        match self {
            Category::Weapon => UNIMPLEMENTED_WEAPONS,
            Category::Charm => UNIMPLEMENTED_CHARMS,
            Category::Super => UNIMPLEMENTED_SUPERS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Weapon => "weapon",
            Category::Charm => "charm",
            Category::Super => "super",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RandomiserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weapon" | "weapons" => Ok(Category::Weapon),
            "charm" | "charms" => Ok(Category::Charm),
            "super" | "supers" => Ok(Category::Super),
            _ => Err(RandomiserError::UnknownCategory(s.to_string())),
        }
    }
}

pub const UNIMPLEMENTED_WEAPONS: &[&str] = &[
    "level_weapon_arc",
    "level_weapon_accuracy",
    "level_weapon_exploder",
    "level_weapon_pushback",
    "level_weapon_splitter",
    "level_weapon_firecracker",
    "level_weapon_firecrackerB",
];

pub const UNIMPLEMENTED_CHARMS: &[&str] = &[
    "charm_pit_saver",
    "charm_directional_dash",
    "charm_EX",
    "charm_float",
];

// Both show up in the super list but do nothing when equipped.
pub const UNIMPLEMENTED_SUPERS: &[&str] = &[
    "level_super_chalice_iii",
    "level_super_chalice_bounce",
];

pub const CHALICE_CHARM: &str = "charm_chalice";

/// Supers only Ms. Chalice can use.
pub const CHALICE_SUPERS: [&str; 2] = [
    "level_super_chalice_vert_beam",
    "level_super_chalice_shield",
];

/// Supers unavailable while playing as Ms. Chalice.
pub const NON_CHALICE_SUPERS: [&str; 2] = ["level_super_beam", "level_super_invincible"];

/// An item name tagged with the category it was owned under.
///
/// Whether the name follows the category's naming convention is decided once
/// here, so later checks do not need to look at the string again.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EquipmentId {
    category: Category,
    name: String,
    conforms: bool,
}

impl EquipmentId {
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        let name = name.into();
        let conforms = name.starts_with(category.prefix());
        Self {
            category,
            name,
            conforms,
        }
    }

    pub fn weapon(name: impl Into<String>) -> Self {
        Self::new(Category::Weapon, name)
    }

    pub fn charm(name: impl Into<String>) -> Self {
        Self::new(Category::Charm, name)
    }

    pub fn super_(name: impl Into<String>) -> Self {
        Self::new(Category::Super, name)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the name carries the category prefix.
    pub fn is_conformant(&self) -> bool {
        self.conforms
    }

    pub fn is_unimplemented(&self) -> bool {
        self.category.unimplemented().contains(&self.name.as_str())
    }

    pub fn is_chalice_charm(&self) -> bool {
        self.category == Category::Charm && self.name == CHALICE_CHARM
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
