//! Command-line interface for KeyPulse
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! keypulse --help
//!
//! # Set log level
//! keypulse --log-level debug
//!
//! # Fix the scramble sequence for reproducible demos
//! keypulse --seed 42
//! ```

use clap::Parser;

/// KeyPulse - decorative RSA key generation demo
///
/// A desktop animation that mimics generating an RSA key pair: a scrambling
/// character readout and an electrical-pulse waveform between two stations.
/// Purely visual - no key material is ever produced.
#[derive(Parser, Debug, Clone)]
#[command(name = "keypulse")]
#[command(version)]
#[command(about = "Decorative RSA key generation animation", long_about = None)]
pub struct Args {
    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Seed for the scramble character sequence
    ///
    /// When set, every generation cycle draws the same pseudo-random
    /// readout. Without it the sequence is seeded from OS entropy.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl Args {
    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::default();
        assert_eq!(args.log_level, "info");
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_log_filter() {
        let mut args = Args::default();

        args.log_level = "debug".to_string();
        assert_eq!(args.log_filter(), "debug");

        args.log_level = "WARNING".to_string();
        assert_eq!(args.log_filter(), "warn");

        args.log_level = "invalid".to_string();
        assert_eq!(args.log_filter(), "info");
    }
}
