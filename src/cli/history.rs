use super::ui;
use crate::core::history::{ConversionRecord, HistoryStore};
use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use comfy_table::Cell;
use std::io::Write;

/// Lists all past conversions, newest first.
pub async fn list(store: &dyn HistoryStore) -> Result<()> {
    let records = store.list_all().await?;

    if records.is_empty() {
        println!(
            "{}",
            ui::style_text("No conversions yet", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Conversion"), ui::header_cell("Date")]);
    for record in &records {
        table.add_row(vec![
            Cell::new(format_conversion(record)),
            Cell::new(format_date(record.timestamp)),
        ]);
    }
    println!("{table}");

    Ok(())
}

/// Deletes all past conversions after confirmation.
pub async fn clear(store: &dyn HistoryStore, assume_yes: bool) -> Result<()> {
    if !assume_yes && !confirm("Clear all conversion history?")? {
        println!("Aborted.");
        return Ok(());
    }

    store.clear_all().await?;
    println!("Conversion history cleared.");
    Ok(())
}

fn format_conversion(record: &ConversionRecord) -> String {
    format!(
        "{:.2} {} → {:.2} {}",
        record.amount, record.from_currency, record.result, record.to_currency
    )
}

fn format_date(timestamp_millis: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_conversion_rounds_for_display() {
        let record = ConversionRecord {
            id: 1,
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            amount: 100.0,
            result: 92.134567,
            timestamp: 0,
        };
        assert_eq!(format_conversion(&record), "100.00 USD → 92.13 EUR");
    }

    #[test]
    fn test_format_date_shape() {
        // Mid-day mid-month, so the date is stable across local timezones
        let rendered = format_date(864_000_000);
        assert_eq!(rendered.len(), "11/01/1970 00:00".len());
        assert!(rendered.contains("/1970"));
    }
}
