// Fixed seed set - UAE deposit-product offers
//
// Used once to materialize the durable store when no catalogue file exists.
// Rates here are the values advertised at the time the set was compiled;
// refresh overwrites them from the live pages.

use crate::catalog::{Catalogue, ProductRecord, RateType};

#[allow(clippy::too_many_arguments)]
fn product(
    provider: &str,
    product_name: &str,
    interest_rate_pct: Option<f64>,
    rate_type: RateType,
    compounding: &str,
    min_deposit: Option<f64>,
    max_deposit: Option<f64>,
    tenure: &str,
    early_access: &str,
    currency: &str,
    url: &str,
) -> ProductRecord {
    ProductRecord {
        provider: provider.to_string(),
        product_name: product_name.to_string(),
        interest_rate_pct,
        rate_type,
        compounding: compounding.to_string(),
        min_deposit,
        max_deposit,
        tenure: tenure.to_string(),
        early_access: early_access.to_string(),
        currency: currency.to_string(),
        url: url.to_string(),
        last_scraped: None,
    }
}

/// Build the seed catalogue. Every record starts with `last_scraped` unset.
pub fn seed_catalogue() -> Catalogue {
    vec![
        product(
            "StashAway",
            "StashAway Simple",
            Some(3.1),
            RateType::Projected,
            "daily",
            Some(0.0),
            None,
            "fully liquid",
            "no penalty",
            "SGD",
            "https://www.stashaway.ae/simple",
        ),
        product(
            "StashAway",
            "StashAway Simple Guaranteed",
            Some(2.45),
            RateType::Fixed,
            "None",
            Some(0.0),
            None,
            "1/3/6/12 months",
            "not permitted",
            "SGD",
            "https://www.stashaway.ae/simple-guaranteed",
        ),
        product(
            "StashAway",
            "StashAway Simple Plus",
            Some(3.6),
            RateType::Projected,
            "daily",
            Some(0.0),
            None,
            "fully liquid",
            "no penalty",
            "SGD",
            "https://www.stashaway.ae/simple-plus",
        ),
        product(
            "Wio",
            "Wio Fixed Deposit",
            Some(4.75),
            RateType::Fixed,
            "None",
            Some(10000.0),
            None,
            "1 month (also 3/6/12)",
            "no penalty ≤3m",
            "AED",
            "https://wio.io/save",
        ),
        product(
            "Wio",
            "Wio On-Demand Savings",
            Some(3.5),
            RateType::Variable,
            "real-time",
            Some(0.0),
            None,
            "fully liquid",
            "no penalty",
            "USD & AED",
            "https://wio.io/save",
        ),
        product(
            "Sarwa",
            "Sarwa Save",
            None,
            RateType::PartnerYield,
            "annualised",
            Some(500.0),
            None,
            "fully liquid",
            "no penalty",
            "USD",
            "https://www.sarwa.co",
        ),
        product(
            "Mashreq",
            "Mashreq NEO Fixed Deposit",
            Some(2.45),
            RateType::Fixed,
            "None",
            Some(10000.0),
            None,
            "1m – 1y",
            "2% penalty",
            "AED USD GBP",
            "https://www.mashreq.com/en/uae/neo/accounts/term-deposits/fixed-deposit/",
        ),
        product(
            "Mashreq",
            "Mashreq NEO Unfixed Deposit",
            Some(1.88),
            RateType::Fixed,
            "None",
            Some(10000.0),
            None,
            "6m – 5y",
            "partial withdrawals allowed",
            "AED USD",
            "https://www.mashreq.com/en/uae/neo/accounts/term-deposits/unfixed-deposit/",
        ),
        product(
            "Mashreq",
            "Mashreq NEO Wakala Deposit",
            Some(1.98),
            RateType::Profit,
            "not applicable",
            Some(10000.0),
            None,
            "1 – 24m",
            "profit based on last tenor",
            "AED USD EUR GBP",
            "https://www.mashreq.com/en/uae/neo/accounts/term-deposits/wakala-deposit/",
        ),
        product(
            "Emirates NBD",
            "ENBD FlexiDeposit",
            Some(3.5),
            RateType::Fixed,
            "None",
            Some(50000.0),
            None,
            "≥3m",
            "unlimited no penalty",
            "AED USD GBP etc.",
            "https://www.emiratesnbd.com/en/flexi-deposit",
        ),
        product(
            "Emirates NBD",
            "ENBD RegulaReturns Deposit",
            Some(3.5),
            RateType::Fixed,
            "payout",
            Some(50000.0),
            None,
            "3m – 5y",
            "reduced interest",
            "AED",
            "https://www.emiratesnbd.com/en/regular-returns-fixed-deposit",
        ),
        product(
            "Emirates NBD",
            "ENBD Fixed Deposit",
            Some(2.1),
            RateType::Fixed,
            "None",
            Some(10000.0),
            None,
            "1m – 5y",
            "1% rate reduction",
            "AED USD GBP SAR AUD CAD",
            "https://www.emiratesnbd.com/en/fixed-deposit",
        ),
        product(
            "Emirates NBD",
            "ENBD FlexiSweep Deposit",
            Some(2.2),
            RateType::Fixed,
            "None",
            Some(1000.0),
            None,
            "≥3m",
            "reduced rate if <6m",
            "AED",
            "https://www.emiratesnbd.com/en/flexisweep-deposit",
        ),
        product(
            "ADCB",
            "ADCB Century Deposit (USD)",
            Some(4.15),
            RateType::Fixed,
            "None",
            Some(5000.0),
            None,
            "500d",
            "1% penalty / no interest <6m",
            "USD",
            "https://www.adcb.com/en/personal/bank/deposits/century-deposit",
        ),
        product(
            "ADCB",
            "ADCB Advantage FD (AED)",
            Some(3.65),
            RateType::Fixed,
            "None",
            Some(50000.0),
            None,
            "1m – 500d",
            "penalties apply",
            "AED",
            "https://www.adcb.com/en/personal/bank/deposits/advantage-fd",
        ),
        product(
            "Wahed",
            "Wahed Save",
            None,
            RateType::Variable,
            "annualised",
            None,
            None,
            "fully liquid",
            "no penalty",
            "USD",
            "https://www.wahed.com/uae",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_sixteen_products() {
        assert_eq!(seed_catalogue().len(), 16);
    }

    #[test]
    fn test_seed_product_names_are_unique() {
        let catalogue = seed_catalogue();
        let mut names: Vec<&str> = catalogue.iter().map(|r| r.product_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalogue.len());
    }

    #[test]
    fn test_seed_is_never_scraped() {
        assert!(seed_catalogue().iter().all(|r| r.last_scraped.is_none()));
    }
}
