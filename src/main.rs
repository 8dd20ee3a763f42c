//! Ask Me Bot - terminal chat client.
//!
//! Forwards prompts to the Ask Me inference endpoint and renders the
//! markdown answers as chat bubbles in an interactive terminal UI. Also
//! supports a single prompt mode (`-p`) for scripting.

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    let mut config = core::config::load();
    if let Some(url) = args.api_url.as_deref() {
        config.api_url = url.to_string();
    }

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &config).await;
    }

    run::run_tui(config).await
}
