//! Application run modes: logger init, single prompt, TUI launch.

use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::api::AskClient;
use crate::core::config::Config;
use crate::tui;

/// Initialize env_logger. In TUI mode, writes to a cache file to avoid
/// corrupting the display.
pub fn init_logger(args: &Args) {
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    );

    if args.prompt.is_none()
        && let Some(path) = core::paths::cache_dir().map(|d| d.join("ask-me-bot.log"))
    {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run single prompt mode: one request, print the normalized answer to stdout.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt_arg = args.prompt.as_ref().expect("prompt is some");
    let prompt = if prompt_arg == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        prompt_arg.clone()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let client = AskClient::new(&config.api_url);
    match client.ask(prompt).await {
        Ok(answer) => {
            println!("{}", tui::text::normalize_markdown(Some(&answer)));
            Ok(())
        }
        Err(err) => {
            log::error!("inference request failed: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Launch the TUI on a blocking thread; surface panics as errors.
pub async fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result = tokio::task::spawn_blocking(move || tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(Box::new(std::io::Error::other("TUI thread panicked")));
        }
    }

    Ok(())
}
