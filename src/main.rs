//! MeshCom Weather Bridge - Main Binary
//!
//! One-shot run: read the node's weather telemetry (HTTP status page by
//! default, serial console with --serial), compose the status message,
//! and hand it to the MeshCom node. Meant to be invoked periodically by
//! cron or a systemd timer.
//!
//! Usage:
//!   cargo run --release                           # page mode
//!   cargo run --release -- --serial               # serial console mode
//!   cargo run --release -- --config /etc/meshwx.toml
//!
//! Environment:
//!   RUST_LOG - tracing filter (default: info)

use meshwx_service::config;
use meshwx_service::model::RunOutcome;
use meshwx_service::runner;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    println!("📡 MeshCom Weather Bridge");
    println!("=========================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut serial_mode = false;
    let mut config_path = "meshwx.toml".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--serial" => {
                serial_mode = true;
                i += 1;
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--serial] [--config PATH]", args[0]);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load_config(&config_path);

    let outcome = if serial_mode {
        runner::run_console(&config)
    } else {
        runner::run_page(&config)
    };

    match outcome {
        RunOutcome::Sent => {
            println!("\n✓ Status message handed to the mesh node");
        }
        RunOutcome::NotSent => {
            println!("\n✗ Run ended without a send");
            std::process::exit(1);
        }
    }
}
