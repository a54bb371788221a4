use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::equipment::{Category, EquipmentId};
use crate::Result;

/// Item names that loaded extensions have declared for each category.
///
/// Taken once per selection and never modified by the randomiser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrySnapshot {
    weapons: HashSet<String>,
    charms: HashSet<String>,
    supers: HashSet<String>,
}

/// On-disk form of a registry snapshot. Missing keys mean no extension items
/// for that category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryManifest {
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub charms: Vec<String>,
    #[serde(default)]
    pub supers: Vec<String>,
}

impl RegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(mut self, category: Category, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names_mut(category)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn names(&self, category: Category) -> &HashSet<String> {
        match category {
            Category::Weapon => &self.weapons,
            Category::Charm => &self.charms,
            Category::Super => &self.supers,
        }
    }

    fn names_mut(&mut self, category: Category) -> &mut HashSet<String> {
        match category {
            Category::Weapon => &mut self.weapons,
            Category::Charm => &mut self.charms,
            Category::Super => &mut self.supers,
        }
    }

    /// Extensions publish plain names, so this compares by raw name within
    /// the identifier's category.
    pub fn contains(&self, id: &EquipmentId) -> bool {
        self.names(id.category()).contains(id.name())
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.charms.is_empty() && self.supers.is_empty()
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let manifest: RegistryManifest = serde_json::from_str(data)?;
        Ok(manifest.into())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

impl From<RegistryManifest> for RegistrySnapshot {
    fn from(manifest: RegistryManifest) -> Self {
        RegistrySnapshot::new()
            .with_names(Category::Weapon, manifest.weapons)
            .with_names(Category::Charm, manifest.charms)
            .with_names(Category::Super, manifest.supers)
    }
}
