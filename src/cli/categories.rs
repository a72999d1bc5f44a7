use crate::cli::commands::CategoriesArgs;
use crate::config::BountydexConfig;
use crate::errors::CatalogError;
use crate::models::CategoryKind;
use crate::query;

pub async fn handle_categories(args: CategoriesArgs, config: BountydexConfig) -> Result<(), CatalogError> {
    let kind: CategoryKind = args.kind.parse().map_err(CatalogError::Config)?;
    let dataset = super::open_snapshot(args.store.as_deref(), &config).await?;
    let categories = query::list_categories(&dataset, kind);

    if args.json {
        println!("{}", serde_json::to_string_pretty(categories)?);
        return Ok(());
    }

    for category in categories {
        println!("{:<14} {}", category.identifier, category.name);
        println!("               {}", category.preview);
    }
    println!("{} {} categories", categories.len(), kind);

    Ok(())
}
