use anyhow::Result;
use hf_query::{
    config,
    inference::{HttpInferenceClient, InferenceClient, Payload},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_INPUTS: &str = "Can you please let us know more details about your ";

/// Parses a level or `RUST_LOG`-style directive list into a filter
fn build_env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter: '{}' ({}). Use a level (error, warn, info, debug, trace) or directives like 'hf_query=debug'",
            directives,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    let env_filter = match build_env_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if args.is_empty() {
        SAMPLE_INPUTS.to_string()
    } else {
        args.join(" ")
    };

    let client = HttpInferenceClient::new(config.inference)?;
    info!("Querying {}", client.endpoint());

    let output = client.query(&Payload::inputs(inputs)).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
