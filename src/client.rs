//! CoinGecko price client implementation

use crate::{
    constants::{
        API_URL_ENV, COINGECKO_API_URL, COINGECKO_COINS_ENDPOINT,
        COINGECKO_SIMPLE_PRICE_ENDPOINT, HISTORY_INTERVAL, REQUEST_TIMEOUT_MS, USER_AGENT,
        VS_CURRENCY,
    },
    error::FetchError,
    types::PriceHistory,
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Price client bound to a single coin
///
/// Every call performs exactly one request; nothing is cached between calls.
///
/// # Example
/// ```no_run
/// use coin_price_sdk::PriceClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PriceClient::new("bitcoin")?;
/// let price = client.get_price().await?;
/// println!("BTC: ${:.2}", price);
///
/// let history = client.get_history(1).await?;
/// println!("{} hourly samples", history.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PriceClient {
    client: Client,
    coin_id: String,
    base_url: String,
}

impl PriceClient {
    /// Creates a client for `coin_id` with default settings
    ///
    /// The API base URL is taken from `COIN_PRICE_API_URL` when set.
    /// No network I/O happens here.
    pub fn new(coin_id: impl Into<String>) -> Result<Self, FetchError> {
        Self::builder(coin_id).build()
    }

    /// Starts building a client for `coin_id`
    pub fn builder(coin_id: impl Into<String>) -> PriceClientBuilder {
        PriceClientBuilder::new(coin_id)
    }

    /// The coin identifier this client was created for
    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    /// The API base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn price_url(&self) -> String {
        format!(
            "{}{}?ids={}&vs_currencies={}",
            self.base_url, COINGECKO_SIMPLE_PRICE_ENDPOINT, self.coin_id, VS_CURRENCY
        )
    }

    fn history_url(&self, days: u32) -> String {
        format!(
            "{}{}/{}/market_chart?vs_currency={}&days={}&interval={}",
            self.base_url, COINGECKO_COINS_ENDPOINT, self.coin_id, VS_CURRENCY, days,
            HISTORY_INTERVAL
        )
    }

    /// Fetches the current USD price
    ///
    /// Fails if the request fails or the body is not shaped
    /// `{ <coin_id>: { "usd": <number> } }`.
    pub async fn get_price(&self) -> Result<f32, FetchError> {
        let url = self.price_url();
        tracing::debug!(coin_id = %self.coin_id, url = %url, "Fetching price from CoinGecko");

        let price = self
            .get_json(&url)
            .await
            .and_then(|json| parse_price(&json, &self.coin_id))
            .inspect_err(|e| {
                tracing::warn!(coin_id = %self.coin_id, error = %e, "Failed to fetch price");
            })?;

        tracing::debug!(coin_id = %self.coin_id, price, "Successfully fetched price");
        Ok(price)
    }

    /// Fetches hourly USD prices covering the last `days` days
    ///
    /// Fails if the request fails or `prices` is absent or not an array.
    /// Individual malformed entries become `0.0` instead of failing the call.
    pub async fn get_history(&self, days: u32) -> Result<PriceHistory, FetchError> {
        let url = self.history_url(days);
        tracing::debug!(coin_id = %self.coin_id, days, url = %url, "Fetching price history from CoinGecko");

        let history = self
            .get_json(&url)
            .await
            .and_then(|json| parse_history(&json))
            .inspect_err(|e| {
                tracing::warn!(coin_id = %self.coin_id, days, error = %e, "Failed to fetch price history");
            })?;

        tracing::debug!(
            coin_id = %self.coin_id,
            days,
            count = history.len(),
            "Successfully fetched price history"
        );
        Ok(history)
    }

    /// Performs a GET and parses the whole body as JSON
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Transport)?;

        if response.content_length() == Some(0) {
            return Err(FetchError::EmptyResponse);
        }

        let body = response.bytes().await.map_err(FetchError::Read)?;
        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Extracts `json[coin_id]["usd"]`
pub(crate) fn parse_price(json: &Value, coin_id: &str) -> Result<f32, FetchError> {
    let coin = json
        .get(coin_id)
        .ok_or_else(|| FetchError::shape(format!("missing \"{}\" object", coin_id)))?;

    let usd = coin
        .get(VS_CURRENCY)
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            FetchError::shape(format!("missing numeric \"{}\" for \"{}\"", VS_CURRENCY, coin_id))
        })?;

    Ok(usd as f32)
}

/// Extracts the price column of `json["prices"]`
pub(crate) fn parse_history(json: &Value) -> Result<PriceHistory, FetchError> {
    let entries = json
        .get("prices")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::shape("\"prices\" missing or not an array"))?;

    let prices = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry_price(entry).unwrap_or_else(|| {
                tracing::debug!(index, entry = %entry, "Malformed history entry, using 0.0");
                0.0
            })
        })
        .collect::<Vec<_>>();

    Ok(PriceHistory::new(prices))
}

/// `[timestamp, price, ...]` -> price
fn entry_price(entry: &Value) -> Option<f32> {
    match entry.as_array() {
        Some(pair) if pair.len() >= 2 => pair[1].as_f64().map(|p| p as f32),
        _ => None,
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`PriceClient`]
#[derive(Debug, Clone)]
pub struct PriceClientBuilder {
    coin_id: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PriceClientBuilder {
    fn new(coin_id: impl Into<String>) -> Self {
        Self {
            coin_id: coin_id.into(),
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base (e.g. `https://api.coingecko.com/api/v3`).
    /// Takes precedence over `COIN_PRICE_API_URL`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    pub fn build(self) -> Result<PriceClient, FetchError> {
        if self.coin_id.is_empty() {
            return Err(FetchError::InvalidCoinId);
        }

        let base_url = self
            .base_url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| COINGECKO_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_millis(REQUEST_TIMEOUT_MS)),
            )
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .build()
            .map_err(FetchError::Client)?;

        Ok(PriceClient {
            client,
            coin_id: self.coin_id,
            base_url,
        })
    }
}
