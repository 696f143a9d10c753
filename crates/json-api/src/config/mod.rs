//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    seed::SeedConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod seed;
pub(crate) mod server;

/// Salesboard JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "salesboard-json", about = "Salesboard JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Seed feed settings.
    #[command(flatten)]
    pub seed: SeedConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::observability::LogFormat;

    const REQUIRED: [&str; 3] = ["salesboard-json", "--database-url", "postgres://localhost/sales"];

    #[test]
    fn explicit_arguments_are_applied() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "salesboard-json",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--database-url",
            "postgres://localhost/sales",
            "--seed-source-url",
            "http://localhost:9000/seed.json",
            "--log-format",
            "json",
            "--slow-request-threshold-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert_eq!(config.database.database_url, "postgres://localhost/sales");
        assert_eq!(config.seed.seed_source_url, "http://localhost:9000/seed.json");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert_eq!(config.observability.slow_request_threshold_ms, 250);

        Ok(())
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut args = REQUIRED.to_vec();

        args.extend(["--port", "not-a-port"]);

        assert!(
            ServerConfig::try_parse_from(args).is_err(),
            "expected non-numeric port to fail"
        );
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut args = REQUIRED.to_vec();

        args.extend(["--log-format", "xml"]);

        assert!(
            ServerConfig::try_parse_from(args).is_err(),
            "expected unknown log format to fail"
        );
    }
}
