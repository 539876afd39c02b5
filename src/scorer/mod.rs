pub mod modifiers;
pub mod synergy;
pub mod types;

pub use self::modifiers::{KitSynergy, ModifierContext, ScoreModifier, TeamCompModifier};
pub use self::synergy::{Needle, SynergyEntry, SynergyModifier, SynergyTable, SynergyTarget};
pub use self::types::{ModifierHit, ScoreBreakdown, ScoredItem};

use crate::analysis::PriorityVector;
use crate::config::ScoringWeights;
use crate::model::Item;
use crate::taxonomy::{StatCategory, Taxonomy};

/// An item with its free text lower-cased once for all substring checks.
#[derive(Debug, Clone)]
pub struct PreparedItem<'a> {
    pub item: &'a Item,
    pub name: String,
    pub description: String,
}

impl<'a> PreparedItem<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self {
            item,
            name: item.name.to_lowercase(),
            description: item.description.to_lowercase(),
        }
    }

    pub fn field(&self, target: SynergyTarget) -> &str {
        match target {
            SynergyTarget::Name => &self.name,
            SynergyTarget::Description => &self.description,
        }
    }
}

/// Scores one item against a priority vector using keyword, attribute and tag evidence.
#[derive(Debug, Clone)]
pub struct ItemScorer {
    pub taxonomy: Taxonomy,
    pub weights: ScoringWeights,
}

impl ItemScorer {
    pub fn new(taxonomy: Taxonomy, weights: ScoringWeights) -> Self {
        Self { taxonomy, weights }
    }

    pub fn score(&self, priorities: &PriorityVector, item: &Item) -> f32 {
        self.breakdown(priorities, &PreparedItem::new(item)).total()
    }

    pub fn breakdown(&self, priorities: &PriorityVector, item: &PreparedItem) -> ScoreBreakdown {
        let w = &self.weights;
        let mut out = ScoreBreakdown::default();

        for category in StatCategory::all() {
            let p = priorities.get(category);
            if p <= 0.0 {
                continue;
            }

            let keyword_hits = self
                .taxonomy
                .keywords(category)
                .iter()
                .filter(|kw| item.description.contains(*kw))
                .count();
            out.description += p * w.description_weight * keyword_hits as f32;

            let attribute_hits = self
                .taxonomy
                .attributes(category)
                .iter()
                .filter(|attr| item.item.stat(attr) > 0.0)
                .count();
            out.attributes += p * w.attribute_weight * attribute_hits as f32;

            if self
                .taxonomy
                .item_tags(category)
                .iter()
                .any(|tag| item.item.has_tag(tag))
            {
                out.tags += p * w.tag_weight;
            }
        }
        out
    }
}
