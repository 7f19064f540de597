use anyhow::Result;
use compass_allowance::{set_allowance, CompassConfig, CompassTools, SetAllowanceInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CHAIN: &str = "ethereum";
const DEFAULT_TOKEN: &str = "USDT";
const DEFAULT_CONTRACT_NAME: &str = "UniswapV3Router";
const DEFAULT_AMOUNT: &str = "1";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compass_allowance=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load .env for local dev (if present)
    if dotenvy::dotenv().is_ok() {
        tracing::info!("Loaded .env");
    }

    let config = CompassConfig::load()?;
    tracing::info!(
        "Configuration loaded: base_url={}, sender={}",
        config.api.base_url,
        config.wallet.sender
    );

    let mut args = std::env::args().skip(1);
    let input = SetAllowanceInput::new(
        args.next().unwrap_or_else(|| DEFAULT_CHAIN.to_string()),
        args.next().unwrap_or_else(|| DEFAULT_TOKEN.to_string()),
        args.next()
            .unwrap_or_else(|| DEFAULT_CONTRACT_NAME.to_string()),
        args.next().unwrap_or_else(|| DEFAULT_AMOUNT.to_string()),
    );
    tracing::info!(
        "Setting allowance: chain={}, token={}, contract={}, amount={}",
        input.chain,
        input.token,
        input.contract_name,
        input.amount
    );

    let tools = CompassTools::new(&config)?;
    match set_allowance(&tools, input).await {
        Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        None => println!("null"),
    }

    Ok(())
}
