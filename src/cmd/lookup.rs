use crate::reports;
use buildforge::api::DataPaths;
use buildforge::error::BfResult;
use buildforge::loader::load_roster;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    pub query: String,
}

pub fn run(args: &LookupArgs, paths: &DataPaths) -> BfResult<()> {
    let roster = load_roster(&paths.champions)?;
    let character = roster.resolve(&args.query)?;
    reports::print_character(character);
    Ok(())
}
