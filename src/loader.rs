use crate::consts::PRIMARY_MAP_ID;
use crate::error::BfResult;
use crate::model::{Ability, Character, Item};
use crate::roster::Roster;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Data Dragon stat keys and the attribute names the taxonomy uses for them.
pub const STAT_KEY_MAP: &[(&str, &str)] = &[
    ("FlatMagicDamageMod", "ap"),
    ("FlatPhysicalDamageMod", "ad"),
    ("FlatCritChanceMod", "critChance"),
    ("FlatCritDamageMod", "critDamage"),
    ("FlatHPPoolMod", "health"),
    ("FlatArmorMod", "armor"),
    ("FlatSpellBlockMod", "magicResist"),
    ("PercentAttackSpeedMod", "attackSpeed"),
    ("FlatMovementSpeedMod", "moveSpeed"),
    ("PercentMovementSpeedMod", "moveSpeed"),
    ("PercentLifeStealMod", "lifeSteal"),
    ("FlatMPPoolMod", "mana"),
    ("FlatHPRegenMod", "healthRegen"),
    ("FlatMPRegenMod", "manaRegen"),
    ("PercentCooldownMod", "abilityHaste"),
];

/// Maps a Data Dragon stat key to its attribute name. Unknown keys pass through.
pub fn canonical_stat(key: &str) -> &str {
    STAT_KEY_MAP
        .iter()
        .find(|(dd, _)| *dd == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}

/// Display helper: `<br>` becomes a space, every other tag is dropped.
pub fn strip_markup(text: &str) -> String {
    let spaced = text.replace("<br>", " ");
    let mut out = String::with_capacity(spaced.len());
    let mut in_tag = false;
    for ch in spaced.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

// Data Dragon wraps its payload in {"type": ..., "data": {...}}. Bare maps are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: BTreeMap<String, T> },
    Bare(BTreeMap<String, T>),
}

impl<T> Envelope<T> {
    fn into_map(self) -> BTreeMap<String, T> {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(map) => map,
        }
    }
}

fn parse_envelope<T: DeserializeOwned>(json: &str) -> BfResult<BTreeMap<String, T>> {
    Ok(serde_json::from_str::<Envelope<T>>(json)?.into_map())
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawAbility {
    name: String,
    description: String,
}

impl From<RawAbility> for Ability {
    fn from(raw: RawAbility) -> Self {
        Ability {
            name: raw.name,
            description: raw.description,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawChampion {
    id: String,
    key: String,
    name: String,
    title: String,
    partype: String,
    tags: Vec<String>,
    passive: Option<RawAbility>,
    spells: Vec<RawAbility>,
}

impl RawChampion {
    fn into_character(self, map_key: &str) -> Character {
        let id = if self.id.is_empty() {
            map_key.to_string()
        } else {
            self.id
        };
        Character {
            id,
            key: self.key,
            name: self.name,
            title: self.title,
            resource: self.partype,
            tags: self.tags.into_iter().collect(),
            passive: self.passive.map(Ability::from),
            spells: self.spells.into_iter().map(Ability::from).collect(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawGold {
    purchasable: bool,
    total: f32,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawItem {
    name: String,
    description: String,
    tags: Vec<String>,
    stats: HashMap<String, f32>,
    gold: Option<RawGold>,
    maps: HashMap<String, bool>,
}

impl RawItem {
    fn into_item(self, id: String) -> Item {
        let mut stats: HashMap<String, f32> = HashMap::with_capacity(self.stats.len());
        for (key, value) in self.stats {
            *stats.entry(canonical_stat(&key).to_string()).or_insert(0.0) += value;
        }
        let gold = self.gold.unwrap_or_default();
        Item {
            available_on_primary_map: self.maps.get(PRIMARY_MAP_ID).copied().unwrap_or(false),
            id,
            name: self.name,
            description: self.description,
            tags: self.tags.into_iter().collect(),
            stats,
            purchasable: gold.purchasable,
            total_cost: gold.total,
        }
    }
}

pub fn parse_roster(json: &str) -> BfResult<Roster> {
    Ok(Roster::new(
        parse_envelope::<RawChampion>(json)?
            .into_iter()
            .map(|(key, raw)| raw.into_character(&key))
            .collect(),
    ))
}

pub fn parse_catalog(json: &str) -> BfResult<Vec<Item>> {
    // BTreeMap iteration keeps the catalog sorted by id.
    Ok(parse_envelope::<RawItem>(json)?
        .into_iter()
        .map(|(id, raw)| raw.into_item(id))
        .collect())
}

pub fn load_roster<P: AsRef<Path>>(path: P) -> BfResult<Roster> {
    let path = path.as_ref();
    let roster = parse_roster(&fs::read_to_string(path)?)?;
    info!("Loaded {} characters from {:?}", roster.len(), path);
    Ok(roster)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> BfResult<Vec<Item>> {
    let path = path.as_ref();
    let items = parse_catalog(&fs::read_to_string(path)?)?;
    let on_map = items.iter().filter(|i| i.available_on_primary_map).count();
    info!("Loaded {} items from {:?}", items.len(), path);
    debug!("{} items flagged for map {}", on_map, PRIMARY_MAP_ID);
    Ok(items)
}
