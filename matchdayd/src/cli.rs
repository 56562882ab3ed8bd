//! CLI argument definitions

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "matchdayd")]
#[command(about = "Matchday relay server: chat completions and today's soccer fixtures")]
#[command(version)]
pub struct Cli {
    /// Configuration file path (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to, e.g. 127.0.0.1:8080
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Increase verbosity (-v, -vv); RUST_LOG takes precedence when set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
