// Product Record - one row of the deposit-product catalogue
//
// Core fields mirror the persisted CSV columns one-to-one. Optional numerics
// and the last-scraped timestamp serialize as empty fields when absent, so
// the file round-trips byte-for-byte through load/persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RATE TYPE
// ============================================================================

/// How the advertised rate should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    /// Contractually fixed for the tenure
    Fixed,

    /// Floating, provider can change it any time
    Variable,

    /// Projected yield, not guaranteed
    Projected,

    /// Islamic profit rate (Wakala and similar)
    Profit,

    /// Passed-through yield from a partner institution
    #[serde(rename = "partner yield")]
    PartnerYield,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Fixed => "fixed",
            RateType::Variable => "variable",
            RateType::Projected => "projected",
            RateType::Profit => "profit",
            RateType::PartnerYield => "partner yield",
        }
    }
}

impl std::fmt::Display for RateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PRODUCT RECORD
// ============================================================================

/// One deposit-product offer.
///
/// `product_name` is the catalogue key (unique by convention, not enforced
/// structurally). `last_scraped` stays empty until the first refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub provider: String,
    pub product_name: String,
    pub interest_rate_pct: Option<f64>,
    pub rate_type: RateType,
    pub compounding: String,
    pub min_deposit: Option<f64>,
    pub max_deposit: Option<f64>,
    pub tenure: String,
    pub early_access: String,
    pub currency: String,
    pub url: String,
    pub last_scraped: Option<DateTime<Utc>>,
}

impl ProductRecord {
    /// Apply a scraper's partial update. Unset delta fields leave the
    /// current value untouched.
    pub fn merge(&mut self, update: ProductUpdate) {
        if let Some(rate) = update.interest_rate_pct {
            self.interest_rate_pct = Some(rate);
        }
        if let Some(rate_type) = update.rate_type {
            self.rate_type = rate_type;
        }
        if let Some(compounding) = update.compounding {
            self.compounding = compounding;
        }
        if let Some(tenure) = update.tenure {
            self.tenure = tenure;
        }
    }
}

/// The full catalogue, ordered as persisted.
pub type Catalogue = Vec<ProductRecord>;

// ============================================================================
// PARTIAL UPDATE
// ============================================================================

/// Delta produced by a scraper. Only populated fields are merged into the
/// record; everything else survives the refresh untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub interest_rate_pct: Option<f64>,
    pub rate_type: Option<RateType>,
    pub compounding: Option<String>,
    pub tenure: Option<String>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the scraped rate
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.interest_rate_pct = Some(rate);
        self
    }

    /// Builder pattern: pin the rate type for this product
    pub fn with_rate_type(mut self, rate_type: RateType) -> Self {
        self.rate_type = Some(rate_type);
        self
    }

    /// Builder pattern: pin the compounding descriptor
    pub fn with_compounding(mut self, compounding: &str) -> Self {
        self.compounding = Some(compounding.to_string());
        self
    }

    /// Builder pattern: pin the tenure descriptor
    pub fn with_tenure(mut self, tenure: &str) -> Self {
        self.tenure = Some(tenure.to_string());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
