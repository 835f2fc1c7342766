//! Command-line interface for the umkm-server binary.
//!
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// umkm-server - commerce backend for small businesses
#[derive(Parser, Debug)]
#[command(
    name = "umkm-server",
    version,
    about = "Stores, public catalogs and WhatsApp orders for small businesses",
    long_about = "Multi-tenant commerce backend: user accounts, one store per user, products,\n\
                  a public catalog per published website, and orders that come back with a\n\
                  WhatsApp link.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a config.",
    after_help = "EXAMPLES:\n    \
                  umkm-server init              # Scaffold umkm.toml and .env.example\n    \
                  umkm-server                   # Start the server (requires umkm.toml)\n    \
                  umkm-server --config my.toml  # Use a custom config file\n    \
                  umkm-server routes            # Print the route table"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "umkm.toml", global = true)]
    pub config: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create umkm.toml, .env.example and the data directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Show the resolved configuration
    Config {
        /// Also check env vars and value constraints
        #[arg(long)]
        validate: bool,
    },

    /// Print every HTTP route
    Routes,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_serves() {
        let cli = Cli::try_parse_from(["umkm-server"]).expect("should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("umkm.toml"));
    }

    #[test]
    fn test_init_args() {
        let cli = Cli::try_parse_from(["umkm-server", "init", "shop", "--force", "--port", "9000"])
            .expect("should parse");

        match cli.command {
            Some(Commands::Init {
                path, force, port, host,
            }) => {
                assert_eq!(path, PathBuf::from("shop"));
                assert!(force);
                assert_eq!(port, 9000);
                assert_eq!(host, "127.0.0.1");
            }
            other => panic!("expected init, got {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["umkm-server", "config", "--validate", "-c", "prod.toml"])
            .expect("should parse");

        assert_eq!(cli.config, PathBuf::from("prod.toml"));
        assert!(matches!(cli.command, Some(Commands::Config { validate: true })));
    }
}
