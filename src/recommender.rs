use crate::analysis::{analyze, normalize, KitProfile, PriorityVector, RawScores};
use crate::config::{Config, RankingLimits, ScoringWeights};
use crate::error::BfResult;
use crate::model::{Character, Item, TeamComposition};
use crate::ranking::{rank_and_partition, CatalogFilter, RecommendationResult};
use crate::scorer::{
    ItemScorer, KitSynergy, ModifierContext, PreparedItem, ScoreModifier, ScoredItem,
    SynergyModifier, SynergyTable, TeamCompModifier,
};
use crate::taxonomy::Taxonomy;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Everything the pipeline derived for one character, plus the final buckets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub character: Character,
    pub raw_scores: RawScores,
    pub priorities: PriorityVector,
    pub kit: KitProfile,
    pub team: Option<TeamComposition>,
    pub recommendations: RecommendationResult,
}

/// The analysis-and-scoring pipeline. Holds no per-request state and is safe to share.
pub struct Recommender {
    pub taxonomy: Taxonomy,
    pub scorer: ItemScorer,
    pub filter: CatalogFilter,
    pub limits: RankingLimits,
    modifiers: Vec<Box<dyn ScoreModifier>>,
}

impl fmt::Debug for Recommender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recommender")
            .field("scorer", &self.scorer)
            .field("filter", &self.filter)
            .field("limits", &self.limits)
            .field("modifiers", &self.modifier_names())
            .finish()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        let taxonomy = Taxonomy::standard();
        Self {
            taxonomy,
            scorer: ItemScorer::new(taxonomy, ScoringWeights::default()),
            filter: CatalogFilter::default(),
            limits: RankingLimits::default(),
            modifiers: Vec::new(),
        }
    }
}

impl Recommender {
    /// Appends a modifier to the end of the chain.
    pub fn with_modifier<M: ScoreModifier + 'static>(mut self, modifier: M) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn modifier_names(&self) -> Vec<&'static str> {
        self.modifiers.iter().map(|m| m.name()).collect()
    }

    pub fn raw_scores(&self, character: &Character) -> RawScores {
        analyze(&self.taxonomy, character)
    }

    pub fn priorities(&self, character: &Character) -> PriorityVector {
        normalize(&self.raw_scores(character))
    }

    pub fn recommend(
        &self,
        character: &Character,
        catalog: &[Item],
        team: Option<TeamComposition>,
    ) -> RecommendationResult {
        let priorities = self.priorities(character);
        self.recommend_with(character, &priorities, catalog, team)
    }

    /// Scores against a caller-supplied priority vector instead of re-analyzing.
    pub fn recommend_with(
        &self,
        character: &Character,
        priorities: &PriorityVector,
        catalog: &[Item],
        team: Option<TeamComposition>,
    ) -> RecommendationResult {
        let ctx = ModifierContext {
            character,
            priorities,
            kit: KitProfile::detect(character),
            team,
        };

        let eligible: Vec<&Item> = catalog
            .iter()
            .filter(|item| self.filter.is_eligible(item))
            .collect();
        debug!(
            "{}: {} of {} items eligible",
            character.id,
            eligible.len(),
            catalog.len()
        );

        let scored: Vec<ScoredItem> = eligible
            .par_iter()
            .map(|item| self.score_item(&ctx, item))
            .collect();

        rank_and_partition(scored, &self.limits)
    }

    pub fn score_item(&self, ctx: &ModifierContext<'_>, item: &Item) -> ScoredItem {
        let prepared = PreparedItem::new(item);
        let mut breakdown = self.scorer.breakdown(ctx.priorities, &prepared);
        for modifier in &self.modifiers {
            breakdown.record_modifier(modifier.name(), modifier.delta(ctx, &prepared));
        }
        ScoredItem {
            item: item.clone(),
            score: breakdown.total(),
            breakdown,
        }
    }

    pub fn analyze(
        &self,
        character: &Character,
        catalog: &[Item],
        team: Option<TeamComposition>,
    ) -> Analysis {
        let raw_scores = self.raw_scores(character);
        let priorities = normalize(&raw_scores);
        let recommendations = self.recommend_with(character, &priorities, catalog, team);
        Analysis {
            character: character.clone(),
            raw_scores,
            priorities,
            kit: KitProfile::detect(character),
            team,
            recommendations,
        }
    }
}

/// Assembles a [`Recommender`] from configuration.
#[derive(TypedBuilder)]
pub struct RecommenderParams {
    #[builder(default)]
    pub config: Config,
    #[builder(default = Taxonomy::standard())]
    pub taxonomy: Taxonomy,
    #[builder(default)]
    pub synergy: SynergyTable,
}

impl RecommenderParams {
    pub fn build_recommender(self) -> BfResult<Recommender> {
        let config = self.config;
        config.validate()?;

        let mut engine = Recommender {
            taxonomy: self.taxonomy,
            scorer: ItemScorer::new(self.taxonomy, config.weights.clone()),
            filter: CatalogFilter::from_rules(&config.filter),
            limits: config.limits.clone(),
            modifiers: Vec::new(),
        };

        let toggles = &config.modifiers;
        if toggles.kit_synergy {
            engine = engine.with_modifier(KitSynergy::default());
        }
        if toggles.synergy {
            engine = engine.with_modifier(SynergyModifier::new(self.synergy));
        }
        if toggles.team_comp {
            engine = engine.with_modifier(TeamCompModifier);
        }

        debug!("Modifier chain: {:?}", engine.modifier_names());
        Ok(engine)
    }
}
