use super::priority::RawScores;
use crate::consts::{FALLBACK_ABILITY_TEXT, MAX_SPELL_SLOTS};
use crate::model::{Ability, Character};
use crate::taxonomy::{StatCategory, Taxonomy};
use strum_macros::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AbilitySlot {
    Passive,
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    const SPELLS: [AbilitySlot; MAX_SPELL_SLOTS] =
        [AbilitySlot::Q, AbilitySlot::W, AbilitySlot::E, AbilitySlot::R];

    pub fn spell(index: usize) -> Option<Self> {
        Self::SPELLS.get(index).copied()
    }
}

/// Passive first, then spells in slot order. Entries without text are skipped.
pub fn labelled_abilities(character: &Character) -> Vec<(AbilitySlot, &Ability)> {
    let mut out = Vec::with_capacity(MAX_SPELL_SLOTS + 1);

    if let Some(passive) = character.passive.as_ref().filter(|a| a.has_text()) {
        out.push((AbilitySlot::Passive, passive));
    }

    for (i, spell) in character.spells.iter().take(MAX_SPELL_SLOTS).enumerate() {
        if !spell.has_text() {
            continue;
        }
        if let Some(slot) = AbilitySlot::spell(i) {
            out.push((slot, spell));
        }
    }
    out
}

/// The texts the analyzer scans. Never empty.
pub fn ability_texts(character: &Character) -> Vec<&str> {
    let texts: Vec<&str> = labelled_abilities(character)
        .into_iter()
        .map(|(_, a)| a.description.as_str())
        .collect();

    if texts.is_empty() {
        debug!(
            "No ability text for '{}', scanning fallback sentence",
            character.id
        );
        vec![FALLBACK_ABILITY_TEXT]
    } else {
        texts
    }
}

/// Adds +1 per category keyword present in `text`. Repeats of a keyword do not count twice.
pub fn scan_text(taxonomy: &Taxonomy, text: &str, scores: &mut RawScores) {
    let lower = text.to_lowercase();
    for category in StatCategory::all() {
        let hits = taxonomy
            .keywords(category)
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count();
        if hits > 0 {
            scores.add(category, hits as f32);
        }
    }
}

pub fn apply_class_bonuses(taxonomy: &Taxonomy, character: &Character, scores: &mut RawScores) {
    for tag in &character.tags {
        for &(category, bonus) in taxonomy.class_bonus(tag) {
            scores.add(category, bonus);
        }
    }
}

pub fn analyze(taxonomy: &Taxonomy, character: &Character) -> RawScores {
    let mut scores = RawScores::default();

    for text in ability_texts(character) {
        scan_text(taxonomy, text, &mut scores);
    }
    apply_class_bonuses(taxonomy, character, &mut scores);

    debug!("Raw scores for '{}': {:?}", character.id, scores);
    scores
}
