use std::path::PathBuf;

use crate::cli::commands::ValidateArgs;
use crate::config::BountydexConfig;
use crate::errors::CatalogError;
use crate::store::StoreLoader;
use crate::utils::formatting::format_bounty;

pub async fn handle_validate(args: ValidateArgs, config: BountydexConfig) -> Result<(), CatalogError> {
    let path = PathBuf::from(&args.store);
    let dataset = StoreLoader::new(config.decode_options()).load(&path).await?;
    let stats = &dataset.stats;

    println!("Store is valid: {}", args.store);
    println!("  reports:       {}", stats.total_reports);
    println!("  total bounty:  {}", format_bounty(stats.total_bounty));
    println!("  total upvotes: {}", stats.total_upvotes);
    println!("  programs:      {} ({} categories)", stats.unique_programs, dataset.categories.by_program.len());
    println!("  vuln types:    {} ({} categories)", stats.unique_vuln_types, dataset.categories.by_bug_type.len());
    println!(
        "  rankings:      {} by bounty, {} by upvotes",
        dataset.rankings.top_by_bounty.len(),
        dataset.rankings.top_by_upvotes.len()
    );

    Ok(())
}
