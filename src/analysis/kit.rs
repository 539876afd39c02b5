use crate::model::Character;
use serde::Serialize;

const HEALING_MARKERS: &[&str] = &["heal", "healing", "lifesteal", "vamp", "regen", "restore"];
const AREA_MARKERS: &[&str] = &["area", "aoe", "splash", "enemies", "around", "radius"];

fn mentions_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

/// Traits of a character's kit that modifiers and explanations key off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitProfile {
    pub healing: bool,
    /// Detected from spells only; passives do not count.
    pub area_damage: bool,
}

impl KitProfile {
    /// Reads the passive and every spell, not just the four the analyzer scans.
    pub fn detect(character: &Character) -> Self {
        let passive = character
            .passive
            .iter()
            .map(|p| p.description.to_lowercase());
        let spells: Vec<String> = character
            .spells
            .iter()
            .map(|s| s.description.to_lowercase())
            .collect();

        let healing = passive
            .chain(spells.iter().cloned())
            .any(|text| mentions_any(&text, HEALING_MARKERS));
        let area_damage = spells.iter().any(|text| mentions_any(text, AREA_MARKERS));

        Self {
            healing,
            area_damage,
        }
    }
}
