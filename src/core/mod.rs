//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod history;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use history::{ConversionRecord, HistoryStore, NewConversion};
pub use rates::{CurrencyCatalog, RateProvider, RateQuote};
