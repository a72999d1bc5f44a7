use crate::cli::commands::TopArgs;
use crate::config::BountydexConfig;
use crate::errors::CatalogError;
use crate::query;

use super::query::print_report;

pub async fn handle_top(args: TopArgs, config: BountydexConfig) -> Result<(), CatalogError> {
    let dataset = super::open_snapshot(args.store.as_deref(), &config).await?;
    let rankings = query::top_rankings(&dataset, args.count);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
        return Ok(());
    }

    println!("Top by bounty:");
    for report in &rankings.top_by_bounty {
        print_report(report);
    }
    println!();
    println!("Top by upvotes:");
    for report in &rankings.top_by_upvotes {
        print_report(report);
    }

    Ok(())
}
