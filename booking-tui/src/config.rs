//! Command-line and environment configuration

use booking_client::ClientConfig;
use booking_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use clap::Parser;
use std::path::PathBuf;

/// Terminal client for the Dongguk Restaurant reservation service
///
/// Every flag can also come from the environment or a `.env` file:
/// `BOOKING_SERVER_URL`, `BOOKING_TIMEOUT_SECS`, `BOOKING_LOG_LEVEL`,
/// `BOOKING_LOG_DIR` and `BOOKING_LOG_JSON`.
#[derive(Debug, Clone, Parser)]
#[command(name = "booking", version, about)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "BOOKING_SERVER_URL", default_value = DEFAULT_BASE_URL)]
    pub server_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "BOOKING_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level (e.g., "info", "debug"); `RUST_LOG` takes precedence
    #[arg(long, env = "BOOKING_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory for the rotating log files
    #[arg(long, env = "BOOKING_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Write logs as JSON lines
    #[arg(long, env = "BOOKING_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server_url.clone()).with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "booking",
            "--server-url",
            "http://10.0.0.5:8080",
            "--timeout",
            "5",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(cli.server_url, "http://10.0.0.5:8080");
        assert!(cli.log_json);
        let config = cli.client_config();
        assert_eq!(config.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_environment_fallback() {
        // Only test touching these variables
        unsafe {
            std::env::set_var("BOOKING_SERVER_URL", "http://192.168.0.9:5000");
            std::env::set_var("BOOKING_TIMEOUT_SECS", "12");
        }
        let cli = Cli::try_parse_from(["booking"]).unwrap();
        assert_eq!(cli.client_config().base_url, "http://192.168.0.9:5000");
        assert_eq!(cli.timeout, 12);

        // Flags beat the environment
        let cli = Cli::try_parse_from(["booking", "--timeout", "3"]).unwrap();
        assert_eq!(cli.timeout, 3);

        unsafe {
            std::env::set_var("BOOKING_TIMEOUT_SECS", "soon");
        }
        assert!(Cli::try_parse_from(["booking"]).is_err());

        unsafe {
            std::env::remove_var("BOOKING_SERVER_URL");
            std::env::remove_var("BOOKING_TIMEOUT_SECS");
        }
        let cli = Cli::try_parse_from(["booking"]).unwrap();
        assert_eq!(cli.server_url, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_bad_timeout_rejected() {
        assert!(Cli::try_parse_from(["booking", "--timeout", "soon"]).is_err());
    }
}
