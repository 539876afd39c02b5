use crate::consts::*;
use crate::error::{BfResult, BuildForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub filter: FilterRules,
    #[command(flatten)]
    pub limits: RankingLimits,
    #[command(flatten)]
    pub modifiers: ModifierSettings,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Added per matching description keyword, times the category priority.
    #[arg(long, default_value_t = DEFAULT_DESCRIPTION_WEIGHT)]
    pub description_weight: f32,
    /// Added per positive structured attribute, times the category priority.
    #[arg(long, default_value_t = DEFAULT_ATTRIBUTE_WEIGHT)]
    pub attribute_weight: f32,
    /// Added once per category whose item tag is present, times the category priority.
    #[arg(long, default_value_t = DEFAULT_TAG_WEIGHT)]
    pub tag_weight: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            description_weight: DEFAULT_DESCRIPTION_WEIGHT,
            attribute_weight: DEFAULT_ATTRIBUTE_WEIGHT,
            tag_weight: DEFAULT_TAG_WEIGHT,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    #[arg(long, default_value_t = DEFAULT_MIN_TOTAL_COST)]
    pub min_total_cost: f32,
    #[arg(long, default_value = DEFAULT_EXCLUDED_TAGS)]
    pub excluded_tags: String,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            min_total_cost: DEFAULT_MIN_TOTAL_COST,
            excluded_tags: DEFAULT_EXCLUDED_TAGS.to_string(),
        }
    }
}

impl FilterRules {
    pub fn get_excluded_tags(&self) -> Vec<String> {
        parse_list(&self.excluded_tags)
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingLimits {
    #[arg(long, default_value_t = DEFAULT_PRIMARY_LIMIT)]
    pub primary_limit: usize,
    #[arg(long, default_value_t = DEFAULT_MOVEMENT_LIMIT)]
    pub movement_limit: usize,
    #[arg(long, default_value = DEFAULT_MOVEMENT_TAG)]
    pub movement_tag: String,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            primary_limit: DEFAULT_PRIMARY_LIMIT,
            movement_limit: DEFAULT_MOVEMENT_LIMIT,
            movement_tag: DEFAULT_MOVEMENT_TAG.to_string(),
        }
    }
}

/// Toggles for the optional score modifiers. All off unless asked for.
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSettings {
    #[arg(long = "enable-kit-synergy", default_value_t = false)]
    pub kit_synergy: bool,
    #[arg(long = "enable-synergy", default_value_t = false)]
    pub synergy: bool,
    #[arg(long = "enable-team-comp", default_value_t = false)]
    pub team_comp: bool,
}

impl ModifierSettings {
    pub fn any(&self) -> bool {
        self.kit_synergy || self.synergy || self.team_comp
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BuildForgeError::Config(format!("Failed to read settings {:?}: {}", path, e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BfResult<()> {
        let w = &self.weights;
        for (name, value) in [
            ("description_weight", w.description_weight),
            ("attribute_weight", w.attribute_weight),
            ("tag_weight", w.tag_weight),
            ("min_total_cost", self.filter.min_total_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BuildForgeError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.limits.movement_tag.trim().is_empty() {
            return Err(BuildForgeError::Config(
                "movement_tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies over only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(weights.description_weight);
        update_if_present!(weights.attribute_weight);
        update_if_present!(weights.tag_weight);

        update_if_present!(filter.min_total_cost);
        update_if_present!(filter.excluded_tags);

        update_if_present!(limits.primary_limit);
        update_if_present!(limits.movement_limit);
        update_if_present!(limits.movement_tag);

        update_if_present!(modifiers.kit_synergy);
        update_if_present!(modifiers.synergy);
        update_if_present!(modifiers.team_comp);
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}
