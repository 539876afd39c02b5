use crate::config::{FilterRules, RankingLimits};
use crate::model::Item;
use crate::scorer::ScoredItem;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Why an item was dropped before scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum Ineligible {
    NotPurchasable,
    TooCheap(f32),
    ExcludedTag(String),
    OffMap,
}

impl fmt::Display for Ineligible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPurchasable => write!(f, "not purchasable"),
            Self::TooCheap(cost) => write!(f, "costs {}, below minimum", cost),
            Self::ExcludedTag(tag) => write!(f, "excluded tag {}", tag),
            Self::OffMap => write!(f, "not available on the primary map"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogFilter {
    pub min_total_cost: f32,
    pub excluded_tags: Vec<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::from_rules(&FilterRules::default())
    }
}

impl CatalogFilter {
    pub fn from_rules(rules: &FilterRules) -> Self {
        Self {
            min_total_cost: rules.min_total_cost,
            excluded_tags: rules.get_excluded_tags(),
        }
    }

    pub fn check(&self, item: &Item) -> Result<(), Ineligible> {
        if !item.purchasable {
            return Err(Ineligible::NotPurchasable);
        }
        // NaN cost fails this comparison too
        if !(item.total_cost >= self.min_total_cost) {
            return Err(Ineligible::TooCheap(item.total_cost));
        }
        if let Some(tag) = self.excluded_tags.iter().find(|t| item.has_tag(t)) {
            return Err(Ineligible::ExcludedTag(tag.clone()));
        }
        if !item.available_on_primary_map {
            return Err(Ineligible::OffMap);
        }
        Ok(())
    }

    #[inline]
    pub fn is_eligible(&self, item: &Item) -> bool {
        self.check(item).is_ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub primary_items: Vec<ScoredItem>,
    pub movement_items: Vec<ScoredItem>,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.primary_items.is_empty() && self.movement_items.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &ScoredItem> {
        self.primary_items.iter().chain(self.movement_items.iter())
    }
}

/// Score descending, then id ascending.
pub fn rank_order(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.item.id.cmp(&b.item.id))
}

/// Sorts scored items and splits them into the primary and movement buckets.
pub fn rank_and_partition(scored: Vec<ScoredItem>, limits: &RankingLimits) -> RecommendationResult {
    let (movement, primary): (Vec<ScoredItem>, Vec<ScoredItem>) = scored
        .into_iter()
        .sorted_by(rank_order)
        .partition(|s| s.item.has_tag(&limits.movement_tag));

    RecommendationResult {
        primary_items: primary.into_iter().take(limits.primary_limit).collect(),
        movement_items: movement.into_iter().take(limits.movement_limit).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::ScoreBreakdown;

    fn scored(id: &str, score: f32, tags: &[&str]) -> ScoredItem {
        ScoredItem {
            item: Item {
                id: id.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
            score,
            breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn ties_break_on_id() {
        let out = rank_and_partition(
            vec![scored("3100", 1.0, &[]), scored("3089", 1.0, &[]), scored("4000", 2.0, &[])],
            &RankingLimits::default(),
        );
        let ids: Vec<_> = out.primary_items.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(ids, vec!["4000", "3089", "3100"]);
    }

    #[test]
    fn boots_go_to_movement_bucket() {
        let limits = RankingLimits {
            movement_limit: 1,
            ..Default::default()
        };
        let out = rank_and_partition(
            vec![
                scored("3020", 1.0, &["Boots"]),
                scored("3006", 2.0, &["Boots"]),
                scored("3001", 0.5, &[]),
            ],
            &limits,
        );
        assert_eq!(out.primary_items.len(), 1);
        assert_eq!(out.movement_items.len(), 1);
        assert_eq!(out.movement_items[0].item.id, "3006");
    }

    #[test]
    fn filter_reports_first_failed_rule() {
        let filter = CatalogFilter::default();
        let item = Item {
            purchasable: true,
            total_cost: 50.0,
            tags: ["Consumable".to_string()].into(),
            available_on_primary_map: true,
            ..Default::default()
        };
        assert_eq!(filter.check(&item), Err(Ineligible::TooCheap(50.0)));

        let item = Item {
            total_cost: 400.0,
            ..item
        };
        assert_eq!(
            filter.check(&item),
            Err(Ineligible::ExcludedTag("Consumable".to_string()))
        );
    }
}
