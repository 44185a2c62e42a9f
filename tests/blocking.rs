mod common;

use coin_price_sdk::{blocking::PriceClient, FetchError};
use common::{mock_market_chart, mock_simple_price, setup_server};

fn blocking_client(server: &httpmock::MockServer, coin_id: &str) -> PriceClient {
    PriceClient::builder(coin_id)
        .base_url(server.base_url())
        .build_blocking()
        .unwrap()
}

#[test]
fn blocking_price() {
    let server = setup_server();
    let mock = mock_simple_price(&server, "bitcoin", r#"{"bitcoin":{"usd":65000.5}}"#);

    let client = blocking_client(&server, "bitcoin");

    assert_eq!(client.coin_id(), "bitcoin");
    assert_eq!(client.get_price().unwrap(), 65000.5);
    mock.assert();
}

#[test]
fn blocking_history() {
    let server = setup_server();
    let mock = mock_market_chart(
        &server,
        "bitcoin",
        1,
        r#"{"prices":[[1000,10.0],[2000,20.5],[3000,"bad"]]}"#,
    );

    let client = blocking_client(&server, "bitcoin");
    let history = client.get_history(1).unwrap();
    drop(client);

    mock.assert();
    assert_eq!(history.into_vec(), vec![10.0, 20.5, 0.0]);
}

#[test]
fn blocking_shape_error() {
    let server = setup_server();
    let _mock = mock_simple_price(&server, "bitcoin", r#"{"bitcoin":{"eur":60000.0}}"#);

    let err = blocking_client(&server, "bitcoin").get_price().unwrap_err();

    assert!(matches!(err, FetchError::Shape(_)), "got {:?}", err);
}

#[test]
fn blocking_rejects_empty_coin_id() {
    let err = PriceClient::new("").unwrap_err();
    assert!(matches!(err, FetchError::InvalidCoinId));
}
