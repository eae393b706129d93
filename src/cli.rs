//! Command-line interface definitions using clap derive API.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// In-memory product catalog with a JSON REST API.
#[derive(Debug, Parser)]
#[command(name = "product-catalog")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML); defaults to ./catalog.toml when present
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind to, overriding server.host and server.port
    #[arg(long, value_name = "HOST:PORT")]
    pub addr: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::parse_from(["product-catalog", "--addr", "127.0.0.1:9000", "-c", "x.toml"]);
        assert_eq!(cli.addr, Some("127.0.0.1:9000".parse().unwrap()));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
