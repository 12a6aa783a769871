//! Fetch three days of historic irradiance for Sydney and print it as a table.
//!
//! ```sh
//! SOLCAST_API_KEY=... cargo run --example historic_table
//! ```
use solcast::Solcast;
use solcast::rest::historic;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("SOLCAST_API_KEY").map_err(|_| "SOLCAST_API_KEY environment variable not set")?;
    let client = Solcast::default().with_key(api_key);

    let res = historic::radiation_and_weather(&client, -33.856784, 151.215297, "2022-10-25T14:45:00.00Z")
        .duration("P3D")
        .output_parameters(["ghi", "dni", "air_temp"])
        .get()
        .await?;

    if !res.success() {
        eprintln!("HTTP {}: {}", res.code(), res.exception().unwrap_or_default());
        return Ok(());
    }

    let df = res.to_table()?;
    println!("{} periods of {}", df.height(), res.periods()?[0]);
    println!("{df}");
    Ok(())
}
