// Scraper Registry - per-product extraction logic
//
// Dispatch table from product name to a scraper function. Each scraper knows
// where its product advertises the current rate and which metadata fields
// are fixed for that product. A product with no registered scraper is a
// coverage gap: refresh leaves it unchanged.

use std::collections::HashMap;

use regex::Regex;

use crate::catalog::{ProductRecord, ProductUpdate, RateType};
use crate::error::ExtractionError;
use crate::fetch::PageContent;

/// Product-specific extraction: record + fetched page in, partial update out.
pub type ScraperFn = fn(&ProductRecord, &PageContent) -> Result<ProductUpdate, ExtractionError>;

// ============================================================================
// EXTRACTION HELPERS
// ============================================================================

/// Find `<label> <decimal>%` in page text (case-insensitive) and parse the
/// decimal as a percentage rate.
pub fn labelled_percent(text: &str, label: &str) -> Result<f64, ExtractionError> {
    let pattern = format!(r"(?i){}\s+(\d+(?:\.\d+)?)\s*%", regex::escape(label));
    let re = Regex::new(&pattern).expect("escaped label is a valid pattern");

    let captures = re
        .captures(text)
        .ok_or_else(|| ExtractionError::MissingPattern(label.to_string()))?;

    let raw = &captures[1];
    raw.parse::<f64>()
        .map_err(|_| ExtractionError::BadNumber(raw.to_string()))
}

// ============================================================================
// BUILT-IN SCRAPERS
// ============================================================================

/// StashAway Simple / Simple Plus: "Projected N.NN%" on the product page.
fn scrape_stashaway_projected(
    _record: &ProductRecord,
    page: &PageContent,
) -> Result<ProductUpdate, ExtractionError> {
    let rate = labelled_percent(page.text(), "Projected")?;
    Ok(ProductUpdate::new()
        .with_rate(rate)
        .with_rate_type(RateType::Projected)
        .with_compounding("daily")
        .with_tenure("fully liquid"))
}

/// StashAway Simple Guaranteed: "Guaranteed N.NN%" headline.
fn scrape_stashaway_guaranteed(
    _record: &ProductRecord,
    page: &PageContent,
) -> Result<ProductUpdate, ExtractionError> {
    let rate = labelled_percent(page.text(), "Guaranteed")?;
    Ok(ProductUpdate::new()
        .with_rate(rate)
        .with_rate_type(RateType::Fixed)
        .with_compounding("None")
        .with_tenure("1/3/6/12 months"))
}

/// Wio fixed deposit: "up to N.NN%" banner. Tenure varies, so it is left as
/// persisted.
fn scrape_wio_fixed(
    _record: &ProductRecord,
    page: &PageContent,
) -> Result<ProductUpdate, ExtractionError> {
    let rate = labelled_percent(page.text(), "up to")?;
    Ok(ProductUpdate::new()
        .with_rate(rate)
        .with_rate_type(RateType::Fixed)
        .with_compounding("None"))
}

/// Wio on-demand savings: "earn N.NN%" on the saving spaces page.
fn scrape_wio_on_demand(
    _record: &ProductRecord,
    page: &PageContent,
) -> Result<ProductUpdate, ExtractionError> {
    let rate = labelled_percent(page.text(), "earn")?;
    Ok(ProductUpdate::new()
        .with_rate(rate)
        .with_rate_type(RateType::Variable)
        .with_compounding("real-time")
        .with_tenure("fully liquid"))
}

/// Emirates NBD fixed deposit: "up to N.NN%" headline rate.
fn scrape_enbd_fixed(
    _record: &ProductRecord,
    page: &PageContent,
) -> Result<ProductUpdate, ExtractionError> {
    let rate = labelled_percent(page.text(), "up to")?;
    Ok(ProductUpdate::new()
        .with_rate(rate)
        .with_rate_type(RateType::Fixed)
        .with_compounding("None"))
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Mapping from product name to its scraper, built once at startup.
pub struct ScraperRegistry {
    scrapers: HashMap<String, ScraperFn>,
}

impl ScraperRegistry {
    /// Registry with all built-in scrapers. Seed products without an entry
    /// here are deliberate coverage gaps.
    pub fn new() -> Self {
        let mut registry = ScraperRegistry::empty();
        registry.register("StashAway Simple", scrape_stashaway_projected);
        registry.register("StashAway Simple Plus", scrape_stashaway_projected);
        registry.register("StashAway Simple Guaranteed", scrape_stashaway_guaranteed);
        registry.register("Wio Fixed Deposit", scrape_wio_fixed);
        registry.register("Wio On-Demand Savings", scrape_wio_on_demand);
        registry.register("ENBD Fixed Deposit", scrape_enbd_fixed);
        registry
    }

    /// Registry with no scrapers at all.
    pub fn empty() -> Self {
        ScraperRegistry {
            scrapers: HashMap::new(),
        }
    }

    /// Register (or replace) the scraper for a product name.
    pub fn register(&mut self, product_name: &str, scraper: ScraperFn) {
        self.scrapers.insert(product_name.to_string(), scraper);
    }

    /// Scraper for a product, if one is registered.
    pub fn lookup(&self, product_name: &str) -> Option<ScraperFn> {
        self.scrapers.get(product_name).copied()
    }

    pub fn len(&self) -> usize {
        self.scrapers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scrapers.is_empty()
    }
}

impl Default for ScraperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_catalogue;

    fn record(product_name: &str) -> ProductRecord {
        seed_catalogue()
            .into_iter()
            .find(|r| r.product_name == product_name)
            .unwrap()
    }

    #[test]
    fn test_labelled_percent_finds_decimal() {
        assert_eq!(
            labelled_percent("Earn a Projected 3.60% yield", "Projected").unwrap(),
            3.6
        );
    }

    #[test]
    fn test_labelled_percent_finds_integer() {
        assert_eq!(labelled_percent("up to 4% p.a.", "up to").unwrap(), 4.0);
    }

    #[test]
    fn test_labelled_percent_is_case_insensitive() {
        assert_eq!(
            labelled_percent("GUARANTEED 2.45%", "Guaranteed").unwrap(),
            2.45
        );
    }

    #[test]
    fn test_labelled_percent_missing_pattern() {
        let result = labelled_percent("no rates here", "Projected");
        assert!(matches!(result, Err(ExtractionError::MissingPattern(_))));
    }

    #[test]
    fn test_labelled_percent_needs_percent_sign() {
        let result = labelled_percent("Projected 3.60 basis points", "Projected");
        assert!(matches!(result, Err(ExtractionError::MissingPattern(_))));
    }

    #[test]
    fn test_stashaway_plus_extraction() {
        // Content "Projected 3.60%" must yield rate 3.60, projected,
        // daily compounding, fully liquid tenure
        let page = PageContent::from_text("Projected 3.60%");
        let rec = record("StashAway Simple Plus");

        let update = scrape_stashaway_projected(&rec, &page).unwrap();

        assert_eq!(update.interest_rate_pct, Some(3.6));
        assert_eq!(update.rate_type, Some(RateType::Projected));
        assert_eq!(update.compounding.as_deref(), Some("daily"));
        assert_eq!(update.tenure.as_deref(), Some("fully liquid"));
    }

    #[test]
    fn test_wio_fixed_leaves_tenure_alone() {
        let page = PageContent::from_text("Lock it in: up to 4.75% on fixed saving spaces");
        let rec = record("Wio Fixed Deposit");

        let update = scrape_wio_fixed(&rec, &page).unwrap();

        assert_eq!(update.interest_rate_pct, Some(4.75));
        assert_eq!(update.tenure, None);
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let registry = ScraperRegistry::new();

        assert!(registry.lookup("StashAway Simple").is_some());
        // Coverage gap, not an error
        assert!(registry.lookup("Wahed Save").is_none());
    }

    #[test]
    fn test_register_replaces_existing() {
        fn always_missing(
            _record: &ProductRecord,
            _page: &PageContent,
        ) -> Result<ProductUpdate, ExtractionError> {
            Err(ExtractionError::MissingPattern("forced".to_string()))
        }

        let mut registry = ScraperRegistry::new();
        registry.register("StashAway Simple", always_missing);

        let scraper = registry.lookup("StashAway Simple").unwrap();
        let result = scraper(
            &record("StashAway Simple"),
            &PageContent::from_text("Projected 3.60%"),
        );
        assert!(result.is_err());
    }
}
