use crate::reports;
use buildforge::api::BuildForge;
use buildforge::config::Config;
use buildforge::error::BfResult;
use clap::Args;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// Only print the first N rows (by id).
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &AuditArgs, forge: &BuildForge) -> BfResult<()> {
    let start = Instant::now();
    let rows = forge.audit();
    info!(
        "Audited {} characters in {:.2?}",
        rows.len(),
        start.elapsed()
    );

    let shown = args.limit.unwrap_or(rows.len()).min(rows.len());
    reports::print_audit(&rows[..shown]);

    let without_signal = rows.iter().filter(|r| r.top_category.is_none()).count();
    let without_items = rows.iter().filter(|r| r.primary_count == 0).count();
    println!(
        "\n{} characters, {} without ability signal, {} without primary items",
        rows.len(),
        without_signal,
        without_items
    );
    Ok(())
}
