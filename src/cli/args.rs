//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::num::ParseIntError;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Auth API - signup and login over a users table
#[derive(Parser, Debug)]
#[command(name = "auth-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on, an empty value means the default
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "PORT", value_parser = parse_port)]
    pub port: u16,

    /// Keep users in process memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

fn parse_port(value: &str) -> Result<u16, ParseIntError> {
    match value.trim() {
        "" => Ok(DEFAULT_SERVER_PORT),
        port => port.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["auth-api", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;

        assert_eq!(args.host, "0.0.0.0");
        assert!(!args.in_memory);
        assert!(!cli.verbose);
    }

    #[test]
    fn serve_overrides() {
        let cli = Cli::try_parse_from(["auth-api", "-v", "serve", "-p", "9001", "--in-memory"]).unwrap();
        let Commands::Serve(args) = cli.command;

        assert_eq!(args.port, 9001);
        assert!(args.in_memory);
        assert!(cli.verbose);
    }

    #[test]
    fn empty_port_uses_default() {
        assert_eq!(parse_port(""), Ok(DEFAULT_SERVER_PORT));
        assert_eq!(parse_port("  "), Ok(DEFAULT_SERVER_PORT));
        assert_eq!(parse_port("9001"), Ok(9001));
        assert!(parse_port("http").is_err());
    }

    #[test]
    fn empty_port_env_does_not_abort_startup() {
        std::env::set_var("PORT", "");
        let parsed = Cli::try_parse_from(["auth-api", "serve"]);
        std::env::remove_var("PORT");

        let Commands::Serve(args) = parsed.unwrap().command;
        assert_eq!(args.port, 8000);
    }
}
