use anyhow::{bail, Result};
use std::env;

use deposit_radar::{CatalogStore, Catalogue, ProductRecord, RefreshEngine};

const DEFAULT_STORE_PATH: &str = "deposit_products.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    // --data <path> overrides the default store location
    let mut store_path = DEFAULT_STORE_PATH.to_string();
    if let Some(pos) = args.iter().position(|a| a == "--data") {
        if pos + 1 >= args.len() {
            bail!("--data requires a file path");
        }
        store_path = args.remove(pos + 1);
        args.remove(pos);
    }

    let engine = RefreshEngine::with_defaults(CatalogStore::new(&store_path))?;

    match args.first().map(String::as_str) {
        None | Some("list") => run_list(&engine, provider_arg(&args)?),
        Some("show") => run_show(&engine, args.get(1).map(String::as_str)),
        Some("refresh") => run_refresh(&engine),
        Some(other) => {
            print_usage();
            bail!("unknown command: {}", other);
        }
    }
}

fn provider_arg(args: &[String]) -> Result<Option<&str>> {
    match args.iter().position(|a| a == "--provider") {
        Some(pos) => match args.get(pos + 1) {
            Some(name) => Ok(Some(name.as_str())),
            None => bail!("--provider requires a provider name"),
        },
        None => Ok(None),
    }
}

fn run_list(engine: &RefreshEngine, provider: Option<&str>) -> Result<()> {
    let mut catalogue = engine.load_data()?;
    if let Some(name) = provider {
        catalogue = filter_by_provider(catalogue, name);
        if catalogue.is_empty() {
            println!("No products for provider '{}'", name);
            return Ok(());
        }
    }

    println!("📊 Deposit Product Catalogue ({} products)\n", catalogue.len());
    print_table(&catalogue);
    Ok(())
}

fn run_show(engine: &RefreshEngine, product_name: Option<&str>) -> Result<()> {
    let Some(name) = product_name else {
        print_usage();
        bail!("show requires a product name");
    };

    let catalogue = engine.load_data()?;
    let Some(record) = catalogue.iter().find(|r| r.product_name == name) else {
        bail!("no product named '{}' in the catalogue", name);
    };

    println!("📋 {}\n", record.product_name);
    println!("  provider:      {}", record.provider);
    println!("  rate:          {}", format_rate(record.interest_rate_pct));
    println!("  rate type:     {}", record.rate_type);
    println!("  compounding:   {}", record.compounding);
    println!("  min deposit:   {}", format_amount(record.min_deposit));
    println!("  max deposit:   {}", format_amount(record.max_deposit));
    println!("  tenure:        {}", record.tenure);
    println!("  early access:  {}", record.early_access);
    println!("  currency:      {}", record.currency);
    println!("  url:           {}", record.url);
    println!("  last scraped:  {}", format_stamp(record));
    Ok(())
}

fn run_refresh(engine: &RefreshEngine) -> Result<()> {
    println!("🔄 Refreshing catalogue from live sources...\n");
    let catalogue = engine.refresh_data()?;
    print_table(&catalogue);
    Ok(())
}

fn filter_by_provider(catalogue: Catalogue, provider: &str) -> Catalogue {
    catalogue
        .into_iter()
        .filter(|r| r.provider.eq_ignore_ascii_case(provider))
        .collect()
}

fn print_table(catalogue: &[ProductRecord]) {
    println!(
        "{:<14} {:<30} {:>7} {:<14} {:<22} {:<17}",
        "PROVIDER", "PRODUCT", "RATE%", "TYPE", "TENURE", "LAST SCRAPED"
    );
    for record in catalogue {
        println!(
            "{:<14} {:<30} {:>7} {:<14} {:<22} {:<17}",
            record.provider,
            record.product_name,
            format_rate(record.interest_rate_pct),
            record.rate_type.to_string(),
            record.tenure,
            format_stamp(record),
        );
    }
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}

fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{:.0}", value),
        None => "-".to_string(),
    }
}

fn format_stamp(record: &ProductRecord) -> String {
    match record.last_scraped {
        Some(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "never".to_string(),
    }
}

fn print_usage() {
    eprintln!("Usage: deposit-radar [--data <path>] <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list [--provider <name>]   Print the catalogue (default)");
    eprintln!("  show <product_name>        Field-per-line detail for one product");
    eprintln!("  refresh                    Re-scrape every product and persist");
}

#[cfg(test)]
mod tests {
    use super::*;
    use deposit_radar::seed_catalogue;

    #[test]
    fn test_filter_by_provider_keeps_only_matches() {
        let filtered = filter_by_provider(seed_catalogue(), "Wio");

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.provider == "Wio"));
    }

    #[test]
    fn test_filter_by_provider_is_case_insensitive() {
        let filtered = filter_by_provider(seed_catalogue(), "wahed");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_format_rate_handles_absent_values() {
        assert_eq!(format_rate(Some(3.6)), "3.60");
        assert_eq!(format_rate(None), "-");
    }
}
