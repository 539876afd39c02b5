use crate::reports;
use buildforge::api::BuildForge;
use buildforge::config::Config;
use buildforge::error::BfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    pub query: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &AnalyzeArgs, forge: &BuildForge) -> BfResult<()> {
    let analysis = forge.analyze(&args.query, None)?;

    reports::print_character(&analysis.character);
    reports::print_priorities(&analysis.raw_scores, &analysis.priorities);
    println!(
        "\nKit: healing={} area_damage={}",
        analysis.kit.healing, analysis.kit.area_damage
    );
    match analysis.priorities.top() {
        Some((category, _)) => println!("Top priority: {}", category.label()),
        None => println!("Top priority: none (no signal)"),
    }
    Ok(())
}
