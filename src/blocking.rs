//! Blocking flavour of the price client
//!
//! Each call blocks the current thread until the request completes or the
//! timeout elapses. The client owns a single-threaded tokio runtime that
//! drives the async [`crate::PriceClient`] underneath, so it must not be
//! created, used or dropped from within an async runtime.

use crate::{
    client::{PriceClient as AsyncPriceClient, PriceClientBuilder},
    error::FetchError,
    types::PriceHistory,
};
use tokio::runtime::{Builder, Runtime};

/// Blocking price client bound to a single coin
///
/// # Example
/// ```no_run
/// use coin_price_sdk::blocking::PriceClient;
///
/// # fn example() -> Result<(), coin_price_sdk::FetchError> {
/// let client = PriceClient::new("bitcoin")?;
/// match client.get_price() {
///     Ok(price) => println!("BTC: ${:.2}", price),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PriceClient {
    // Declared before `runtime` so the HTTP client is dropped first.
    inner: AsyncPriceClient,
    runtime: Runtime,
}

impl PriceClient {
    /// Creates a blocking client for `coin_id` with default settings
    pub fn new(coin_id: impl Into<String>) -> Result<Self, FetchError> {
        Self::builder(coin_id).build_blocking()
    }

    /// Starts building a client; finish with [`PriceClientBuilder::build_blocking`]
    pub fn builder(coin_id: impl Into<String>) -> PriceClientBuilder {
        AsyncPriceClient::builder(coin_id)
    }

    pub fn coin_id(&self) -> &str {
        self.inner.coin_id()
    }

    /// Fetches the current USD price, blocking until done
    pub fn get_price(&self) -> Result<f32, FetchError> {
        self.runtime.block_on(self.inner.get_price())
    }

    /// Fetches hourly USD prices covering the last `days` days, blocking until done
    pub fn get_history(&self, days: u32) -> Result<PriceHistory, FetchError> {
        self.runtime.block_on(self.inner.get_history(days))
    }
}

impl PriceClientBuilder {
    /// Builds a [`blocking::PriceClient`](PriceClient)
    pub fn build_blocking(self) -> Result<PriceClient, FetchError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        let inner = {
            let _guard = runtime.enter();
            self.build()?
        };

        Ok(PriceClient { inner, runtime })
    }
}
