//! Rate board workflow: the latest rates against a base currency, capped to
//! a fixed number of rows.

use crate::core::currency;
use crate::core::rates::{RateProvider, RateQuote};
use crate::error::Error;

pub const DEFAULT_BOARD_LIMIT: usize = 10;

/// Walks `known_currencies` in its given order and emits a quote for each
/// label whose code the provider returned a rate for, stopping at `limit`.
///
/// The candidate list's own order is the display order; quotes are never
/// re-sorted by rate or name, and the cap applies however many rates the
/// provider sent back. A fetch failure propagates unchanged with no partial
/// result.
pub async fn list_top_rates(
    provider: &dyn RateProvider,
    base: &str,
    known_currencies: &[String],
    limit: usize,
) -> Result<Vec<RateQuote>, Error> {
    let rates = provider.fetch_rates(base).await?;

    let mut quotes = Vec::new();
    for label in known_currencies {
        let code = currency::code_of(label);
        if let Some(&rate) = rates.get(code) {
            quotes.push(RateQuote {
                currency: label.clone(),
                rate,
            });
            if quotes.len() >= limit {
                break;
            }
        }
    }
    Ok(quotes)
}
