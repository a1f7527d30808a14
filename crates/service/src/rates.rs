use async_trait::async_trait;

use models::currency::Currency;

use crate::errors::ServiceError;

/// Seam over the external quote provider so business logic can be exercised
/// with fixed or failing rates in tests.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Latest closing rate for a provider symbol such as `USDBRL=X`.
    async fn latest_rate(&self, symbol: &str) -> Result<f64, ServiceError>;
}

/// Provider-specific symbol for a currency pair, e.g. USD -> BRL = `USDBRL=X`.
pub fn pair(from: Currency, to: Currency) -> String {
    format!("{from}{to}=X")
}

/// Production provider backed by the Yahoo Finance daily chart endpoint.
#[derive(Debug, Default)]
pub struct YahooRateProvider;

#[async_trait]
impl ExchangeRateProvider for YahooRateProvider {
    async fn latest_rate(&self, symbol: &str) -> Result<f64, ServiceError> {
        common::quotes::fetch_latest_close(symbol)
            .await
            .map_err(|e| ServiceError::RateFetch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_builds_provider_symbol() {
        assert_eq!(pair(Currency::Usd, Currency::Brl), "USDBRL=X");
        assert_eq!(pair(Currency::Jpy, Currency::Krw), "JPYKRW=X");
    }
}
