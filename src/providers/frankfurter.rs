//! Rate provider backed by the Frankfurter public API.
//!
//! Three endpoints, all plain GET + JSON: `/currencies` for the catalog,
//! `/latest?base=X` for the rate board, and `/latest?amount=N&from=F&to=T`
//! for a single conversion (the provider applies the amount itself).
//! Every call is a fresh round trip: no retries, no caching, no timeout
//! overrides beyond reqwest's defaults.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::rates::{CurrencyCatalog, RateProvider};
use crate::error::Error;

const USER_AGENT: &str = "kurs/1.0";

pub struct FrankfurterProvider {
    base_url: String,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str) -> Self {
        FrankfurterProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::from_request)?;

        let response = client.get(url).send().await.map_err(Error::from_request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("HTTP error: {status} for {url}")));
        }

        response.text().await.map_err(Error::from_request)
    }
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    #[instrument(name = "FetchCatalog", skip(self))]
    async fn fetch_catalog(&self) -> Result<CurrencyCatalog, Error> {
        let url = format!("{}/currencies", self.base_url);
        debug!("Requesting currency catalog from {}", url);

        let text = self.get_text(&url).await?;
        let catalog: CurrencyCatalog = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Failed to parse currency catalog: {e}")))?;
        Ok(catalog)
    }

    #[instrument(name = "FetchRates", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>, Error> {
        let url = format!("{}/latest?base={}", self.base_url, base);
        debug!("Requesting latest rates from {}", url);

        let text = self.get_text(&url).await?;
        let data: LatestResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Failed to parse rates for base {base}: {e}")))?;
        Ok(data.rates)
    }

    #[instrument(
        name = "FetchConversion",
        skip(self),
        fields(from = %from, to = %to, amount = %amount)
    )]
    async fn fetch_conversion(&self, from: &str, to: &str, amount: f64) -> Result<f64, Error> {
        let url = format!(
            "{}/latest?amount={}&from={}&to={}",
            self.base_url, amount, from, to
        );
        debug!("Requesting conversion from {}", url);

        let text = self.get_text(&url).await?;
        let data: LatestResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Parse(format!("Failed to parse conversion {from}->{to}: {e}"))
        })?;

        data.rates.get(to).copied().ok_or_else(|| {
            Error::Parse(format!("No rate for target currency {to} in response"))
        })
    }
}
