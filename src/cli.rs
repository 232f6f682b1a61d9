// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use crate::core::config::{HeaderAction, ServerTarget};
use crate::core::error::RenderError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Header Snippet - HTTP security header configuration generator
///
/// Generates configuration instructions that add or remove HTTP security
/// response headers, using the OWASP Secure Headers Project reference files.
#[derive(Parser, Debug)]
#[command(name = "header-snippet")]
#[command(author = "Header Snippet Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "HTTP security header configuration snippet generator")]
#[command(long_about = "Header Snippet - HTTP security header configuration generator

Generates copy-pasteable configuration instructions that ADD or REMOVE
HTTP security response headers, using the reference JSON files provided
by the OWASP Secure Headers Project (OSHP).

Supported servers: APACHE_HTTP_SERVER, NGINX, IIS")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Generate Nginx directives:     header-snippet generate --server NGINX --action ADD
  2. Preview without writing:       header-snippet generate --server IIS --action REMOVE --dry-run
  3. List supported servers:        header-snippet targets

For detailed help on each command, use: header-snippet <command> --help")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the configuration instructions snippet
    ///
    /// Loads the reference JSON file for the action (headers_add.json or
    /// headers_remove.json), renders it for the target server and writes the
    /// sorted instructions to the output file.
    ///
    /// EXAMPLES:
    ///   # Add headers on Apache HTTP Server
    ///   header-snippet generate --server APACHE_HTTP_SERVER --action ADD
    ///
    ///   # Remove headers on Nginx using a local copy of the reference files
    ///   header-snippet generate --server NGINX --action REMOVE --source ./ci
    ///
    ///   # Print the snippet instead of writing it
    ///   header-snippet generate --server IIS --action ADD --dry-run
    Generate {
        /// Target server (APACHE_HTTP_SERVER, NGINX, IIS)
        #[arg(short, long, value_name = "SERVER", value_parser = parse_server)]
        server: ServerTarget,

        /// Action performed on headers (ADD, REMOVE)
        #[arg(short, long, value_name = "ACTION", value_parser = parse_action)]
        action: HeaderAction,

        /// Location of the reference JSON files (directory or https: URL)
        #[arg(long, value_name = "LOCATION")]
        source: Option<String>,

        /// File in which the generated content is written
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Dry run - print the snippet without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// List supported servers
    Targets,
}

fn parse_server(value: &str) -> Result<ServerTarget, RenderError> {
    value.parse()
}

fn parse_action(value: &str) -> Result<HeaderAction, RenderError> {
    value.parse()
}
