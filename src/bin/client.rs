use clap::Parser;

use exchange::cli::ClientArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ClientArgs::parse();
    exchange::client::run(&args).await?;
    Ok(())
}
