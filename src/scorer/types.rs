use crate::model::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierHit {
    pub modifier: String,
    pub delta: f32,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    // Base scorer
    pub description: f32,
    pub attributes: f32,
    pub tags: f32,

    // Modifier chain
    pub modifiers: f32,
    #[serde(default)]
    pub modifier_hits: Vec<ModifierHit>,
}

impl ScoreBreakdown {
    pub fn base(&self) -> f32 {
        self.description + self.attributes + self.tags
    }

    /// Base plus modifiers, floored at zero.
    pub fn total(&self) -> f32 {
        (self.base() + self.modifiers).max(0.0)
    }

    pub fn record_modifier(&mut self, name: &str, delta: f32) {
        if delta != 0.0 {
            self.modifiers += delta;
            self.modifier_hits.push(ModifierHit {
                modifier: name.to_string(),
                delta,
            });
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item: Item,
    pub score: f32,
    pub breakdown: ScoreBreakdown,
}
