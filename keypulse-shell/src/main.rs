//! KeyPulse - Main entry point
//!
//! Parses command-line arguments and starts the application.
//!
//! # Usage
//!
//! ```bash
//! keypulse --help              # Show help
//! keypulse --log-level debug   # Enable debug logging
//! keypulse --seed 42           # Deterministic scramble readout
//! ```

mod app;
mod cli;

pub use cli::Args;

use clap::Parser;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Configure logging based on CLI args
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::info!("Starting KeyPulse");
    log::debug!("CLI args: {:?}", args);

    // Store args for app to access
    app::set_cli_args(args);

    // Start the application
    app::app_main();
}
