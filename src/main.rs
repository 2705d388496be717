//! Stub REST API scaffold entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_scaffold::api::{create_router, ROUTE_TABLE};
use api_scaffold::config::Config;
use api_scaffold::metrics;
use api_scaffold::utils::shutdown_signal;

/// Stub REST API scaffold.
#[derive(Parser, Debug)]
#[command(name = "api-scaffold")]
#[command(about = "Stub auth, product and user REST endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Bind address, overrides HOST.
        #[arg(long)]
        host: Option<String>,

        /// Bind port, overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the route table.
    Routes {
        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so VERBOSE / RUST_LOG from .env apply
    let config = Config::load();

    // Initialize logging
    let verbose = args.verbose || config.as_ref().is_ok_and(|c| c.verbose);
    let filter = if verbose {
        EnvFilter::new("api_scaffold=debug,tower_http=debug,info")
    } else {
        let fallback = config
            .as_ref()
            .map(|c| c.rust_log.clone())
            .unwrap_or_else(|_| "info".to_string());
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::registry()
        .with(args.json_logs.then(|| fmt::layer().json()))
        .with((!args.json_logs).then(fmt::layer))
        .with(filter)
        .init();

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Routes { json }) => cmd_routes(json),
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, None, None).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("API SCAFFOLD - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr()?);
    println!("  Log Level: {}", config.rust_log);
    println!("  Verbose: {}", config.verbose);
    println!("  Swagger UI: {}", if config.enable_swagger { "Enabled" } else { "Disabled" });
    println!("  Metrics: {}", if config.enable_metrics { "Enabled" } else { "Disabled" });
    println!("  Permissive CORS: {}", config.cors_permissive);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the route table.
fn cmd_routes(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ROUTE_TABLE)?);
        return Ok(());
    }

    println!("{:<8} {:<32} {:<10} HANDLER", "METHOD", "PATH", "GROUP");
    for entry in ROUTE_TABLE {
        println!(
            "{:<8} {:<32} {:<10} {}",
            entry.method.as_ref(),
            entry.path,
            entry.group.as_ref(),
            entry.handler
        );
    }
    println!("{} routes", ROUTE_TABLE.len());

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let mut options = config.router_options();
    if config.enable_metrics {
        options.metrics = Some(metrics::install_prometheus()?);
        info!("Prometheus metrics enabled at /metrics");
    }
    if options.swagger {
        info!("Swagger UI enabled at /swagger-ui");
    }

    let router = create_router(options);

    // Start HTTP server
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %addr, routes = ROUTE_TABLE.len(), "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
