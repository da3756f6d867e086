use clap::Parser;
use promptforge::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    promptforge::run(cli).await
}
