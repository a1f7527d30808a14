use thiserror::Error;

pub mod types;
pub mod utils;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Thin client for the Yahoo Finance v8 chart endpoint. One GET per call,
/// no caching: callers that need the same rate twice fetch it twice.
pub mod quotes {
    use super::*;
    use serde::Deserialize;

    const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
    const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

    #[derive(Debug, Deserialize)]
    pub struct ChartResponse {
        pub chart: Chart,
    }

    #[derive(Debug, Deserialize)]
    pub struct Chart {
        #[serde(default)]
        pub result: Option<Vec<ChartResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ChartResult {
        pub indicators: Indicators,
    }

    #[derive(Debug, Deserialize)]
    pub struct Indicators {
        pub quote: Vec<QuoteBlock>,
    }

    #[derive(Debug, Deserialize)]
    pub struct QuoteBlock {
        #[serde(default)]
        pub close: Vec<Option<f64>>,
    }

    /// Most recent non-null daily close in the response, if any.
    pub fn latest_close(body: &ChartResponse) -> Option<f64> {
        body.chart
            .result
            .as_ref()?
            .first()?
            .indicators
            .quote
            .first()?
            .close
            .iter()
            .rev()
            .find_map(|c| *c)
    }

    /// Fetch the latest daily closing price for a symbol such as `USDBRL=X`.
    pub async fn fetch_latest_close(symbol: &str) -> Result<f64, CoreError> {
        let url = format!("{CHART_URL}/{symbol}?interval=1d&range=1d");
        let resp = reqwest::Client::new()
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        let body = resp
            .json::<ChartResponse>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))?;
        latest_close(&body)
            .ok_or_else(|| CoreError::Parse(format!("no closing price returned for {symbol}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn latest_close_picks_last_non_null() {
        let raw = r#"{
            "chart": {
                "result": [{
                    "indicators": {
                        "quote": [{"close": [5.01, 5.17, null]}]
                    }
                }]
            }
        }"#;
        let body: quotes::ChartResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(quotes::latest_close(&body), Some(5.17));
    }

    #[test]
    fn latest_close_empty_result_is_none() {
        let raw = r#"{"chart": {"result": null}}"#;
        let body: quotes::ChartResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(quotes::latest_close(&body), None);
    }

    #[test]
    fn latest_close_all_null_is_none() {
        let raw = r#"{
            "chart": {"result": [{"indicators": {"quote": [{"close": [null, null]}]}}]}
        }"#;
        let body: quotes::ChartResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(quotes::latest_close(&body), None);
    }
}
