//! # Coin Price SDK
//!
//! Fetches the current USD price and the hourly USD price history of a single
//! coin from the CoinGecko API.
//!
//! ## Usage
//!
//! ```no_run
//! use coin_price_sdk::PriceClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PriceClient::new("bitcoin")?;
//!
//! let price = client.get_price().await?;
//! println!("BTC: ${:.2}", price);
//!
//! let history = client.get_history(1).await?;
//! for (hour, price) in history.iter().enumerate() {
//!     println!("{:>2}: ${:.2}", hour, price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A synchronous client with the same operations lives in [`blocking`].
//!
//! ## Configuration
//!
//! Defaults are compile-time constants in the `constants` module:
//!
//! - API base: `https://api.coingecko.com/api/v3` (or `COIN_PRICE_API_URL`)
//! - Request timeout: 10 seconds
//!
//! Use [`PriceClient::builder`] to override them per client.
//!
//! ## Error Handling
//!
//! ```no_run
//! use coin_price_sdk::{FetchError, PriceClient};
//!
//! # async fn example() -> Result<(), FetchError> {
//! let client = PriceClient::new("bitcoin")?;
//!
//! match client.get_price().await {
//!     Ok(price) => println!("BTC: ${:.2}", price),
//!     Err(FetchError::Shape(msg)) => println!("Unexpected response: {}", msg),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A history response may contain entries that are not `[timestamp, price]`
//! pairs. Those become `0.0` so the series keeps one sample per entry.

pub mod blocking;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{PriceClient, PriceClientBuilder};
pub use error::FetchError;
pub use types::PriceHistory;
