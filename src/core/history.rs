//! Conversion history abstractions.

use crate::error::Error;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A stored conversion. Immutable once written; removed only by clear-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: i64,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub result: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// A conversion about to be stored; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewConversion {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub result: f64,
    pub timestamp: Option<i64>,
}

impl NewConversion {
    pub fn new(from: &str, to: &str, amount: f64, result: f64) -> Self {
        NewConversion {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            amount,
            result,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The timestamp to store: the explicit one, or now.
    pub(crate) fn timestamp_or_now(&self) -> i64 {
        self.timestamp
            .unwrap_or_else(|| Utc::now().timestamp_millis())
    }
}

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persists a conversion, assigning a unique monotonically increasing id
    /// and a creation timestamp if not already set. The record is durable
    /// once this returns.
    async fn append(&self, conversion: NewConversion) -> Result<ConversionRecord, Error>;

    /// Every stored record, newest first. Timestamp ties break toward the
    /// later insert.
    async fn list_all(&self) -> Result<Vec<ConversionRecord>, Error>;

    /// Deletes every record. Idempotent.
    async fn clear_all(&self) -> Result<(), Error>;
}
