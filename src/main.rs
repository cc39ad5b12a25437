use anyhow::{Context, Result};
use clap::Parser;
use rake_optim::optimizer::{Algorithm, OptimizeRequest, Optimizer, OptimizerConfig};
use rake_optim::validation::validate_orders;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rake-optimize")]
#[command(about = "Sequence rake orders by greedy, genetic-style or Monte Carlo search", long_about = None)]
struct Cli {
    /// Request JSON file ({"orders": [...], "algorithm": "..."}); stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Strategy selector overriding the request (greedy, ga, monteCarlo)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Seed for reproducible stochastic runs
    #[arg(long, env = "RAKE_OPTIM_SEED")]
    seed: Option<u64>,

    /// Optimizer configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "RAKE_OPTIM_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "RAKE_OPTIM_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            OptimizerConfig::load(path).context("Failed to load configuration")?
        }
        None => OptimizerConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let optimizer = Optimizer::new(config).context("Invalid configuration")?;

    let raw = read_input(cli.input.as_deref())?;
    let request = decode_request(&raw)?;

    let selector = cli.algorithm.as_deref().or(request.algorithm.as_deref());
    let algorithm = Algorithm::from_selector(selector);
    if let Some(s) = selector {
        if s != algorithm.selector() {
            warn!("Unknown algorithm '{}', falling back to {}", s, algorithm);
        }
    }

    for issue in validate_orders(&request.orders) {
        warn!(index = issue.index, kind = ?issue.kind, "{}", issue.message);
    }

    let result = optimizer.optimize(&request.orders, algorithm);
    info!(
        algorithm = %algorithm,
        orders = request.orders.len(),
        score = result.score,
        "Optimization complete"
    );

    let load = optimizer.rake_load(&result.suggested);
    if load.over_capacity {
        warn!(
            "Rake over capacity: {:.1} t loaded, {:.1} t allowed",
            load.total_tons, load.capacity_tons
        );
    } else if load.under_utilized {
        warn!(
            "Rake under-utilized: {:.1}% of {:.1} t",
            load.utilization_percent, load.capacity_tons
        );
    } else {
        info!(
            "Rake utilization: {:.1}% ({:.1} t free)",
            load.utilization_percent,
            load.remaining_tons()
        );
    }

    let response = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("Failed to encode response")?;
    println!("{response}");

    Ok(())
}

fn setup_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read request from stdin")?;
            Ok(raw)
        }
    }
}

/// Decodes a request body. Valid JSON that is not a request object is
/// treated as an empty request.
fn decode_request(raw: &str) -> Result<OptimizeRequest> {
    let value: serde_json::Value = serde_json::from_str(raw).context("Request is not valid JSON")?;
    Ok(OptimizeRequest::deserialize(&value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_request() {
        let req = decode_request(r#"{"orders":[{"id":"A","due":"1","tons":5}],"algorithm":"ga"}"#)
            .unwrap();
        assert_eq!(req.orders.len(), 1);
        assert_eq!(req.algorithm(), Algorithm::Genetic);
    }

    #[test]
    fn test_decode_non_object_is_empty() {
        for raw in ["null", "42", r#""orders""#] {
            let req = decode_request(raw).unwrap();
            assert!(req.orders.is_empty());
            assert_eq!(req.algorithm(), Algorithm::Greedy);
        }
    }

    #[test]
    fn test_decode_invalid_json_fails() {
        assert!(decode_request("{orders:").is_err());
    }
}
