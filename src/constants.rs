//! Constants for the coin price client
//!
//! Defaults live here as compile-time constants. Per-client overrides go
//! through [`PriceClientBuilder`](crate::client::PriceClientBuilder).

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Environment variable that overrides [`COINGECKO_API_URL`] for `PriceClient::new`
pub const API_URL_ENV: &str = "COIN_PRICE_API_URL";

/// CoinGecko API endpoint for simple price queries
pub const COINGECKO_SIMPLE_PRICE_ENDPOINT: &str = "/simple/price";

/// CoinGecko API endpoint prefix for per-coin queries
pub const COINGECKO_COINS_ENDPOINT: &str = "/coins";

/// Quote currency for every request
pub const VS_CURRENCY: &str = "usd";

/// Granularity requested from the market chart endpoint
pub const HISTORY_INTERVAL: &str = "hourly";

/// HTTP request timeout (in milliseconds)
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// User agent for HTTP requests
pub const USER_AGENT: &str = concat!("coin-price-sdk/", env!("CARGO_PKG_VERSION"));
