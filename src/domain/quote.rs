use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuotesinkError, Result};

/// One market price observation for a symbol at a point in time.
///
/// Immutable once constructed; validated once at the transport boundary and
/// never mutated afterwards. The timestamp is caller-supplied, not stamped
/// by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub volume: u64,
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Shape check only — no business-rule rejection (a negative price is
    /// semantically wrong but passes; a non-finite one cannot be cached).
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(QuotesinkError::Validation(
                "symbol must be a non-empty string".to_string(),
            ));
        }
        if !self.price.is_finite() {
            return Err(QuotesinkError::Validation(format!(
                "price must be finite, got {}",
                self.price
            )));
        }
        Ok(())
    }

    /// Cache key for the latest price of this quote's symbol
    pub fn price_key(&self) -> String {
        last_price_key(&self.symbol)
    }

    /// Cache key for the latest full snapshot of this quote's symbol
    pub fn snapshot_key(&self) -> String {
        last_quote_key(&self.symbol)
    }
}

/// Cache key holding the latest price for a symbol, as a string-encoded float
pub fn last_price_key(symbol: &str) -> String {
    format!("last_price:{symbol}")
}

/// Cache key holding the latest serialized quote for a symbol
pub fn last_quote_key(symbol: &str) -> String {
    format!("last_quote:{symbol}")
}
