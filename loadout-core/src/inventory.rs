use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::equipment::{Category, EquipmentId};
use crate::RandomiserError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    One,
    Two,
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => f.write_str("player one"),
            PlayerId::Two => f.write_str("player two"),
        }
    }
}

impl FromStr for PlayerId {
    type Err = RandomiserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "one" | "1" | "p1" => Ok(PlayerId::One),
            "two" | "2" | "p2" => Ok(PlayerId::Two),
            _ => Err(RandomiserError::UnknownPlayer(s.to_string())),
        }
    }
}

/// Items a player has unlocked, as read from their save. Lists can hold the
/// same item more than once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub weapons: Vec<EquipmentId>,
    pub charms: Vec<EquipmentId>,
    pub supers: Vec<EquipmentId>,
}

impl Inventory {
    pub fn from_names<W, C, S>(weapons: W, charms: C, supers: S) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            weapons: weapons.into_iter().map(EquipmentId::weapon).collect(),
            charms: charms.into_iter().map(EquipmentId::charm).collect(),
            supers: supers.into_iter().map(EquipmentId::super_).collect(),
        }
    }

    pub fn owned(&self, category: Category) -> &[EquipmentId] {
        match category {
            Category::Weapon => &self.weapons,
            Category::Charm => &self.charms,
            Category::Super => &self.supers,
        }
    }
}
