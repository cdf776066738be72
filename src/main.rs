//! Production-plan entry point: CLI wiring, plan computation, and optional API server.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use production_plan::config::ServiceConfig;
use production_plan::io::export::export_csv;
use production_plan::telemetry::init_tracing;
use production_plan::{PlanSummary, ProductionPlanRequest, production_plan};

/// Computes the cost-optimal merit-order production plan for a fleet of power plants.
#[derive(Debug, Parser)]
#[command(name = "production-plan", version)]
struct Cli {
    /// Load the request from a JSON payload file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    payload: Option<PathBuf>,

    /// Use a built-in sample payload (payload1, payload2, payload3)
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Export the plan to CSV
    #[arg(long, value_name = "PATH")]
    plan_out: Option<PathBuf>,

    /// Service configuration TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start the REST API server instead of computing a single plan
    #[cfg(feature = "api")]
    #[arg(long)]
    serve: bool,

    /// API server port, overriding the configuration
    #[cfg(feature = "api")]
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

fn load_config(cli: &Cli) -> Result<ServiceConfig> {
    let cfg = match &cli.config {
        Some(path) => ServiceConfig::from_toml_file(path)?,
        None => ServiceConfig::default(),
    };
    Ok(cfg)
}

fn load_request(cli: &Cli) -> Result<ProductionPlanRequest> {
    // --payload takes priority, then --preset, then payload1
    let request = if let Some(path) = &cli.payload {
        ProductionPlanRequest::from_json_file(path)?
    } else {
        ProductionPlanRequest::from_preset(cli.preset.as_deref().unwrap_or("payload1"))?
    };

    let errors = request.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid payload: {}", details.join("; "));
    }
    Ok(request)
}

fn run_once(cli: &Cli) -> Result<()> {
    let request = load_request(cli)?;
    let plan = production_plan(&request)?;

    println!("{plan}");
    println!("{}", PlanSummary::from_plan(&plan));

    if let Some(path) = &cli.plan_out {
        export_csv(&plan, path)
            .with_context(|| format!("failed to write CSV \"{}\"", path.display()))?;
        info!(path = %path.display(), "plan written");
    }
    Ok(())
}

#[cfg(feature = "api")]
fn run_server(cli: &Cli, mut cfg: ServiceConfig) -> Result<()> {
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    let addr = cfg.socket_addr()?;

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(production_plan::api::serve(addr))
        .with_context(|| format!("API server on {addr} failed"))
}

fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(&cli)?;

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("invalid configuration");
    }

    init_tracing(&cfg.logging);

    #[cfg(feature = "api")]
    if cli.serve {
        return run_server(&cli, cfg);
    }

    run_once(&cli)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
