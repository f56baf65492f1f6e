use std::sync::Arc;

use case_web::JsonTemplateEngine;
use caseflow::{build_flows, build_renderer, server, AppConfig, AppResult, FlowStores};
use clap::{Parser, Subcommand};
use serde_json::json;

/// Wizards lineales de casos.
#[derive(Parser)]
#[command(name = "caseflow")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Nivel de log si `RUST_LOG` no está definido.
    #[arg(long, env = "CASEFLOW_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Arranca el servidor HTTP (por defecto).
    Serve {
        /// Sobrescribe `CASEFLOW_BIND_ADDR`.
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Lista los flujos registrados con sus pasos y hash de definición.
    Flows,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "caseflow failed");
        eprintln!("caseflow: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    match cli.command.unwrap_or(Command::Serve { listen: None }) {
        Command::Serve { listen } => {
            let config = match listen {
                Some(addr) => config.with_bind_addr(&addr)?,
                None => config,
            };
            server::run(config).await
        }
        Command::Flows => {
            let flows = build_flows(FlowStores::in_memory(),
                                    build_renderer(&config.render),
                                    &config.public_url,
                                    Arc::new(JsonTemplateEngine))?;
            for flow in &flows {
                let registry = flow.dispatcher.registry();
                let line = json!({
                    "name": registry.name(),
                    "prefix": flow.prefix(),
                    "steps": registry.order(),
                    "hash": registry.definition_hash(),
                });
                println!("{line}");
            }
            Ok(())
        }
    }
}
