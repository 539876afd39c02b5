use crate::analysis::{KitProfile, PriorityVector};
use crate::config::Config;
use crate::error::BfResult;
use crate::explain::explain;
use crate::loader::{load_catalog, load_roster, strip_markup};
use crate::model::{Character, Item, TeamComposition};
use crate::ranking::RecommendationResult;
use crate::recommender::{Analysis, Recommender, RecommenderParams};
use crate::roster::Roster;
use crate::scorer::{ScoredItem, SynergyTable};
use crate::taxonomy::StatCategory;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Recommends items for `character` with the default engine (no modifiers).
pub fn recommend(character: &Character, catalog: &[Item]) -> RecommendationResult {
    Recommender::default().recommend(character, catalog, None)
}

#[derive(Debug, Clone)]
pub struct DataPaths {
    pub champions: PathBuf,
    pub items: PathBuf,
    /// Optional; a missing file just means no table bonuses.
    pub synergy: Option<PathBuf>,
}

/// One recommended item with display text and reasons attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecommendation {
    pub id: String,
    pub name: String,
    pub plain_description: String,
    #[serde(flatten)]
    pub scored: ScoredItem,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub analysis: Analysis,
    pub primary_items: Vec<ItemRecommendation>,
    pub movement_items: Vec<ItemRecommendation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRow {
    pub id: String,
    pub name: String,
    pub top_category: Option<StatCategory>,
    pub kit: KitProfile,
    pub primary_count: usize,
    pub movement_count: usize,
    pub best_item: Option<String>,
    pub best_score: f32,
}

/// Loaded data plus a configured engine.
pub struct BuildForge {
    pub engine: Recommender,
    pub roster: Roster,
    pub catalog: Vec<Item>,
    pub synergy: SynergyTable,
}

impl BuildForge {
    pub fn load(config: Config, paths: &DataPaths) -> BfResult<Self> {
        let roster = load_roster(&paths.champions)?;
        let catalog = load_catalog(&paths.items)?;

        let synergy = match &paths.synergy {
            Some(path) if path.exists() => SynergyTable::load_from_file(path)?,
            Some(path) => {
                warn!("Synergy table {:?} not found, continuing without it", path);
                SynergyTable::empty()
            }
            None => SynergyTable::empty(),
        };

        Self::from_parts(config, roster, catalog, synergy)
    }

    pub fn from_parts(
        config: Config,
        roster: Roster,
        catalog: Vec<Item>,
        synergy: SynergyTable,
    ) -> BfResult<Self> {
        let engine = RecommenderParams::builder()
            .config(config)
            .synergy(synergy.clone())
            .build()
            .build_recommender()?;

        info!(
            "Engine ready: {} characters, {} items, modifiers {:?}",
            roster.len(),
            catalog.len(),
            engine.modifier_names()
        );
        Ok(Self {
            engine,
            roster,
            catalog,
            synergy,
        })
    }

    pub fn character(&self, query: &str) -> BfResult<&Character> {
        self.roster.resolve(query)
    }

    pub fn analyze(&self, query: &str, team: Option<TeamComposition>) -> BfResult<Analysis> {
        let character = self.character(query)?;
        Ok(self.engine.analyze(character, &self.catalog, team))
    }

    pub fn priorities(&self, query: &str) -> BfResult<(&Character, PriorityVector)> {
        let character = self.character(query)?;
        Ok((character, self.engine.priorities(character)))
    }

    pub fn report(
        &self,
        query: &str,
        team: Option<TeamComposition>,
        with_reasons: bool,
    ) -> BfResult<RecommendationReport> {
        let analysis = self.analyze(query, team)?;

        let decorate = |items: &[ScoredItem]| -> Vec<ItemRecommendation> {
            items
                .iter()
                .map(|s| ItemRecommendation {
                    id: s.item.id.clone(),
                    name: s.item.name.clone(),
                    plain_description: strip_markup(&s.item.description),
                    scored: s.clone(),
                    reasons: if with_reasons {
                        explain(
                            &analysis.character,
                            analysis.kit,
                            &s.item,
                            s.score,
                            &self.synergy,
                            team,
                        )
                    } else {
                        Vec::new()
                    },
                })
                .collect()
        };

        let primary_items = decorate(&analysis.recommendations.primary_items);
        let movement_items = decorate(&analysis.recommendations.movement_items);
        Ok(RecommendationReport {
            analysis,
            primary_items,
            movement_items,
        })
    }

    /// Runs every character through the pipeline in parallel.
    pub fn audit(&self) -> Vec<AuditRow> {
        let mut rows: Vec<AuditRow> = self
            .roster
            .characters()
            .par_iter()
            .map(|c| {
                let analysis = self.engine.analyze(c, &self.catalog, None);
                let best = analysis.recommendations.primary_items.first();
                AuditRow {
                    id: c.id.clone(),
                    name: c.display_name().to_string(),
                    top_category: analysis.priorities.top().map(|(cat, _)| cat),
                    kit: analysis.kit,
                    primary_count: analysis.recommendations.primary_items.len(),
                    movement_count: analysis.recommendations.movement_items.len(),
                    best_item: best.map(|s| s.item.name.clone()),
                    best_score: best.map(|s| s.score).unwrap_or(0.0),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        rows
    }
}
