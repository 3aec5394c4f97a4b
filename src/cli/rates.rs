use super::ui;
use crate::board::{self, DEFAULT_BOARD_LIMIT};
use crate::core::currency;
use crate::core::rates::RateProvider;
use crate::store::SqliteHistoryStore;
use anyhow::Result;
use comfy_table::Cell;

/// Base currencies the user may persist as their preference.
pub const ALLOWED_BASE_CURRENCIES: [&str; 3] = [
    "BGN - Bulgarian Lev",
    "USD - US Dollar",
    "EUR - Euro",
];

/// Displays the rate board: up to ten quotes against the base currency, in
/// catalog order.
pub async fn run(
    provider: &dyn RateProvider,
    store: &SqliteHistoryStore,
    base_override: Option<&str>,
) -> Result<()> {
    let base = match base_override {
        Some(value) => currency::code_of(value).to_uppercase(),
        None => store.base_currency()?,
    };

    let catalog = provider.fetch_catalog().await?;
    let known_currencies = currency::labels(&catalog);
    let quotes = board::list_top_rates(provider, &base, &known_currencies, DEFAULT_BOARD_LIMIT)
        .await?;

    println!(
        "Base Currency: {}\n",
        ui::style_text(&currency::label_for(&catalog, &base), ui::StyleType::Title)
    );

    if quotes.is_empty() {
        println!(
            "{}",
            ui::style_text("No rates available for this base", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);
    for quote in &quotes {
        table.add_row(vec![
            Cell::new(&quote.currency),
            ui::numeric_cell(&format!("{:.4}", quote.rate)),
        ]);
    }
    println!("{table}");

    Ok(())
}

/// Persists the base currency preference. Only the allowed set is accepted.
pub fn set_base(store: &SqliteHistoryStore, requested: &str) -> Result<()> {
    let code = currency::code_of(requested).to_uppercase();

    let allowed = ALLOWED_BASE_CURRENCIES
        .iter()
        .find(|label| currency::code_of(label) == code);
    let Some(label) = allowed else {
        anyhow::bail!(
            "Base currency must be one of: {}",
            ALLOWED_BASE_CURRENCIES.join(", ")
        );
    };

    store.set_base_currency(&code)?;
    println!("Base currency set to {label}");
    Ok(())
}
