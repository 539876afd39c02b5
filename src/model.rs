use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

impl Ability {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    /// Resource bar type ("Mana", "Energy", ...).
    pub resource: String,
    pub tags: BTreeSet<String>,
    pub passive: Option<Ability>,
    pub spells: Vec<Ability>,
}

impl Character {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn uses_mana(&self) -> bool {
        self.resource.to_lowercase().contains("mana")
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    /// Structured attributes keyed by taxonomy attribute name (`ap`, `health`, ...).
    pub stats: HashMap<String, f32>,
    pub purchasable: bool,
    pub total_cost: f32,
    pub available_on_primary_map: bool,
}

impl Item {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Attribute value, treating an absent entry as zero.
    pub fn stat(&self, name: &str) -> f32 {
        self.stats.get(name).copied().unwrap_or(0.0)
    }
}

/// Enemy team profile a caller may pass to bias results.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum TeamComposition {
    Squishy,
    Tanky,
    CcHeavy,
    #[default]
    Balanced,
}

impl TeamComposition {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Squishy => "squishy enemies",
            Self::Tanky => "tanky enemies",
            Self::CcHeavy => "CC-heavy enemies",
            Self::Balanced => "a balanced enemy team",
        }
    }
}
