use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumString};

/// The closed set of build dimensions a character can lean towards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatCategory {
    Ap,
    Ad,
    Tank,
    AttackSpeed,
    Movement,
    Healing,
    AbilityHaste,
    CrowdControl,
}

impl StatCategory {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item = StatCategory> {
        StatCategory::iter()
    }

    /// Short column label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ap => "AP",
            Self::Ad => "AD",
            Self::Tank => "Tank",
            Self::AttackSpeed => "AS",
            Self::Movement => "MS",
            Self::Healing => "Heal",
            Self::AbilityHaste => "AH",
            Self::CrowdControl => "CC",
        }
    }
}

pub type CategoryTable = [&'static [&'static str]; StatCategory::COUNT];

// Order of every table follows the declaration order of StatCategory.
const KEYWORDS: CategoryTable = [
    &[
        "ability power",
        "ap",
        "magic damage",
        "magical damage",
        "spell",
        "cast",
        "scaling",
        "mage",
        "burst",
        "arcane",
        "mana",
        "magic",
    ],
    &[
        "attack damage",
        "ad",
        "physical damage",
        "auto attack",
        "autoattack",
        "basic attack",
        "marksman",
        "crit",
        "critical",
    ],
    &[
        "health",
        "armor",
        "magic resist",
        "magic resistance",
        "shield",
        "resist",
        "defensive",
        "protection",
        "damage reduction",
        "defense",
        "guard",
        "block",
        "tough",
        "tank",
        "durable",
    ],
    &["attack speed", "faster", "rapid", "quick", "swift"],
    &[
        "movement speed",
        "move speed",
        "mobility",
        "dash",
        "blink",
        "teleport",
        "leap",
        "jump",
        "rush",
        "charge",
        "speed",
    ],
    &[
        "heal",
        "healing",
        "lifesteal",
        "regeneration",
        "regen",
        "life steal",
        "sustain",
        "drain",
        "recovery",
    ],
    &["cooldown", "reduction", "cdr", "haste", "ability haste", "fast"],
    &[
        "stun",
        "slow",
        "root",
        "fear",
        "charm",
        "taunt",
        "knockup",
        "knock up",
        "knock back",
        "knockback",
        "pull",
        "suppress",
        "airborne",
        "immobilize",
        "crowd control",
        "cc",
    ],
];

const ATTRIBUTES: CategoryTable = [
    &["ap", "magicPenetration", "mana", "manaRegen"],
    &["ad", "armorPenetration", "critChance", "critDamage"],
    &["health", "armor", "magicResist", "tenacity"],
    &["attackSpeed"],
    &["moveSpeed"],
    &[
        "omnivamp",
        "physicalVamp",
        "spellVamp",
        "lifeSteal",
        "healthRegen",
    ],
    &["abilityHaste"],
    &["slow", "stun"],
];

const ITEM_TAGS: CategoryTable = [
    &["SpellDamage"],
    &["Damage"],
    &["Health", "Armor", "SpellBlock"],
    &["AttackSpeed"],
    &["Boots"],
    &[],
    &["CooldownReduction"],
    &[],
];

pub type ClassBonus = (&'static str, &'static [(StatCategory, f32)]);

const CLASS_BONUSES: &[ClassBonus] = &[
    ("Mage", &[(StatCategory::Ap, 2.0)]),
    ("Marksman", &[(StatCategory::Ad, 2.0)]),
    ("Tank", &[(StatCategory::Tank, 2.0)]),
    (
        "Fighter",
        &[(StatCategory::Ad, 1.0), (StatCategory::Tank, 1.0)],
    ),
    (
        "Assassin",
        &[(StatCategory::Ad, 1.5), (StatCategory::Movement, 1.5)],
    ),
    (
        "Support",
        &[
            (StatCategory::CrowdControl, 1.5),
            (StatCategory::AbilityHaste, 1.0),
        ],
    ),
];

/// Read-only lookup tables shared by the analyzer and the item scorer.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    keywords: &'static CategoryTable,
    attributes: &'static CategoryTable,
    item_tags: &'static CategoryTable,
    class_bonuses: &'static [ClassBonus],
}

pub static STANDARD: Taxonomy = Taxonomy {
    keywords: &KEYWORDS,
    attributes: &ATTRIBUTES,
    item_tags: &ITEM_TAGS,
    class_bonuses: CLASS_BONUSES,
};

impl Taxonomy {
    pub fn standard() -> Self {
        STANDARD
    }

    /// Lowercase trigger phrases for a category.
    #[inline]
    pub fn keywords(&self, category: StatCategory) -> &'static [&'static str] {
        self.keywords[category.index()]
    }

    /// Names of `Item::stats` entries that feed a category.
    #[inline]
    pub fn attributes(&self, category: StatCategory) -> &'static [&'static str] {
        self.attributes[category.index()]
    }

    /// Item tags that earn the one-off tag bonus for a category.
    #[inline]
    pub fn item_tags(&self, category: StatCategory) -> &'static [&'static str] {
        self.item_tags[category.index()]
    }

    pub fn class_bonus(&self, class_tag: &str) -> &'static [(StatCategory, f32)] {
        self.class_bonuses
            .iter()
            .find(|(tag, _)| *tag == class_tag)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(&[])
    }

    pub fn class_tags(&self) -> impl Iterator<Item = &'static str> {
        self.class_bonuses.iter().map(|(tag, _)| *tag)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}
