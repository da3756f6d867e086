use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "promptforge",
    version,
    about = "Prompt relay server for the PromptForge front-end"
)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// Address the HTTP server binds to
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,
}
