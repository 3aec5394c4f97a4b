//! Exchange rate provider abstractions.

use crate::error::Error;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

/// Currency code to display name, as published by the provider.
///
/// A `BTreeMap` keeps iteration in code order, which is the order the rate
/// board candidate list is built in.
pub type CurrencyCatalog = BTreeMap<String, String>;

/// A single rate board row: a currency label and its rate against the base.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub currency: String,
    pub rate: f64,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the full currency catalog, unfiltered.
    async fn fetch_catalog(&self) -> Result<CurrencyCatalog, Error>;

    /// Fetches the latest rates against `base`. The result maps target codes
    /// to multipliers and need not contain the base itself.
    async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>, Error>;

    /// Converts `amount` from one currency to another in a single request.
    /// Returns the converted value with full provider precision.
    async fn fetch_conversion(&self, from: &str, to: &str, amount: f64) -> Result<f64, Error>;
}
