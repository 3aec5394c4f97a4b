//! Conversion workflow: validate input, fetch the converted amount, record
//! the conversion in history.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::history::{HistoryStore, NewConversion};
use crate::core::rates::RateProvider;
use crate::error::Error;

/// Parses a user-entered amount. Anything that is not a positive finite
/// number is rejected before a network call is made.
pub fn parse_amount(input: &str) -> Result<f64, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("Please enter an amount".to_string()));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| Error::Validation(format!("Invalid number format: {trimmed}")))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(format!(
            "Amount must be a positive number, got {trimmed}"
        )));
    }
    Ok(amount)
}

pub struct Converter {
    provider: Arc<dyn RateProvider>,
    history: Arc<dyn HistoryStore>,
}

impl Converter {
    pub fn new(provider: Arc<dyn RateProvider>, history: Arc<dyn HistoryStore>) -> Self {
        Converter { provider, history }
    }

    /// Converts `amount` (raw user input) from one currency to another.
    ///
    /// Equal source and target currencies are not special-cased; the provider
    /// returns an identity rate. The returned value keeps full provider
    /// precision; rounding is a display concern.
    ///
    /// The history append is best-effort: a storage failure is logged and
    /// never hides the result from the caller.
    pub async fn convert(&self, from: &str, to: &str, amount: &str) -> Result<f64, Error> {
        let amount = parse_amount(amount)?;

        let result = self
            .provider
            .fetch_conversion(from, to, amount)
            .await
            .map_err(|e| Error::ConversionFailed(Box::new(e)))?;
        debug!("Converted {} {} to {} {}", amount, from, result, to);

        let record = NewConversion::new(from, to, amount, result);
        if let Err(e) = self.history.append(record).await {
            warn!("Failed to record conversion in history: {e}");
        }

        Ok(result)
    }
}
