use crate::reports;
use buildforge::api::BuildForge;
use buildforge::config::Config;
use buildforge::error::BfResult;
use buildforge::model::TeamComposition;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Character id, key, name, or part of a name.
    pub query: String,

    /// Enemy team profile. Turns on the team-composition modifier.
    #[arg(long = "team-comp", value_enum)]
    pub enemy: Option<TeamComposition>,

    /// Print the full report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Attach reasons to every recommended item.
    #[arg(long, default_value_t = false)]
    pub explain: bool,

    #[command(flatten)]
    pub config: Config,
}

pub fn prepare_config(args: &RecommendArgs, config: &mut Config) {
    if args.enemy.is_some() {
        config.modifiers.team_comp = true;
    }
}

pub fn run(args: &RecommendArgs, forge: &BuildForge) -> BfResult<()> {
    let report = forge.report(&args.query, args.enemy, args.explain)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let character = &report.analysis.character;
    info!(
        "Recommending for {} ({})",
        character.display_name(),
        character.id
    );
    reports::print_character(character);
    reports::print_priorities(&report.analysis.raw_scores, &report.analysis.priorities);
    if let Some(team) = args.enemy {
        println!("\nAgainst {}", team.describe());
    }
    reports::print_items("Core items", &report.primary_items, args.explain);
    reports::print_items("Boots", &report.movement_items, args.explain);
    Ok(())
}
