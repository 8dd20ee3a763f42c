//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
EXAMPLES:
  ask-me-bot                    Launch the interactive chat
  ask-me-bot -p \"question\"      Single prompt, print the answer to stdout
  ask-me-bot -p -               Read the prompt from stdin
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal chat client for the Ask Me Bot Q&A endpoint",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Send a single prompt then exit (without opening the chat UI)
    #[arg(
        short = 'p',
        long,
        help = "Provide a prompt to get an immediate answer (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override the inference endpoint URL for this invocation
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
