//! Helpers for the "CODE - Display Name" labels shown to the user.
//!
//! The provider catalog maps bare codes to names; everywhere the user picks
//! or sees a currency we use the combined label, so these helpers convert
//! between the two forms.

use crate::core::rates::CurrencyCatalog;

/// Extracts the currency code from a label. A bare code passes through.
pub fn code_of(label: &str) -> &str {
    label.split(" - ").next().unwrap_or(label).trim()
}

/// Builds the display label for a code and its catalog name.
pub fn label(code: &str, name: &str) -> String {
    format!("{code} - {name}")
}

/// All catalog entries as display labels, in catalog (code) order.
pub fn labels(catalog: &CurrencyCatalog) -> Vec<String> {
    catalog
        .iter()
        .map(|(code, name)| label(code, name))
        .collect()
}

/// Looks up the full label for a code. Falls back to the bare code when the
/// catalog does not know it.
pub fn label_for(catalog: &CurrencyCatalog, code: &str) -> String {
    catalog
        .get(code)
        .map(|name| label(code, name))
        .unwrap_or_else(|| code.to_string())
}
