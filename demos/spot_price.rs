use coin_price_sdk::blocking::PriceClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let coin_id = std::env::args().nth(1).unwrap_or_else(|| "bitcoin".to_string());

    println!("CoinGecko spot price ({})", coin_id);
    println!("{:-<40}", "");

    let client = PriceClient::new(coin_id)?;

    match client.get_price() {
        Ok(price) => println!("Spot:    ${:.2}", price),
        Err(e) => eprintln!("Spot price unavailable: {}", e),
    }

    let history = client.get_history(1)?;
    let (low, high) = history
        .iter()
        .filter(|p| **p > 0.0)
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(*p), hi.max(*p)));

    println!("Samples: {}", history.len());
    if low <= high {
        println!("24h low:  ${:.2}", low);
        println!("24h high: ${:.2}", high);
    }

    Ok(())
}
