use crate::cli::commands::QueryArgs;
use crate::config::BountydexConfig;
use crate::errors::CatalogError;
use crate::models::Report;
use crate::query::{self, Pagination, ReportFilter};
use crate::utils::formatting::format_bounty;
use tracing::info;

pub async fn handle_query(args: QueryArgs, config: BountydexConfig) -> Result<(), CatalogError> {
    let dataset = super::open_snapshot(args.store.as_deref(), &config).await?;

    let filter = ReportFilter {
        program: args.program,
        vuln_type: args.vuln_type,
        min_bounty: args.min_bounty,
        search: args.search,
    };
    info!(?filter, page = args.page, limit = args.limit, "Querying reports");

    let page = query::list_reports(&dataset, &filter, Pagination::new(args.page, args.limit));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    for report in &page.reports {
        print_report(report);
    }
    let info = &page.pagination;
    println!(
        "Page {}/{} ({} matching reports, {} per page)",
        info.current_page, info.total_pages, info.total_reports, info.per_page
    );

    Ok(())
}

pub(crate) fn print_report(report: &Report) {
    println!(
        "{:>10}  {:>5} upvotes  {} | {}",
        format_bounty(report.bounty),
        report.upvotes,
        report.program,
        report.vuln_type
    );
    println!("            {}", report.title);
    println!("            {}", report.link);
}
