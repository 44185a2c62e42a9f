#![allow(dead_code)]

use coin_price_sdk::PriceClient;
use httpmock::{Method::GET, Mock, MockServer};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn client_for(server: &MockServer, coin_id: &str) -> PriceClient {
    PriceClient::builder(coin_id)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

pub fn mock_simple_price<'a>(server: &'a MockServer, coin_id: &'a str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/simple/price")
            .query_param("ids", coin_id)
            .query_param("vs_currencies", "usd");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_market_chart<'a>(
    server: &'a MockServer,
    coin_id: &'a str,
    days: u32,
    body: &str,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/coins/{}/market_chart", coin_id))
            .query_param("vs_currency", "usd")
            .query_param("days", days.to_string())
            .query_param("interval", "hourly");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
