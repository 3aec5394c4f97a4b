use super::ui;
use crate::convert::Converter;
use crate::core::currency;
use crate::core::history::HistoryStore;
use crate::core::rates::RateProvider;
use anyhow::Result;
use std::sync::Arc;

/// Converts an amount and prints the result rounded to two digits. The
/// stored history record keeps the full provider precision.
pub async fn run(
    provider: Arc<dyn RateProvider>,
    history: Arc<dyn HistoryStore>,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<()> {
    // Accept either a bare code or a full "CODE - Name" label
    let from_code = currency::code_of(from).to_uppercase();
    let to_code = currency::code_of(to).to_uppercase();

    let converter = Converter::new(provider, history);
    let result = converter.convert(&from_code, &to_code, amount).await?;

    println!(
        "{}",
        ui::style_text(&format!("{result:.2} {to_code}"), ui::StyleType::ResultValue)
    );
    Ok(())
}
