use std::env;

/// Default inference endpoint (API Gateway deployment); override with
/// ASK_ME_API_URL.
pub const DEFAULT_API_URL: &str =
    "https://qk81uz3wme.execute-api.us-east-1.amazonaws.com/prod/ask";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

/// Load configuration from environment. The endpoint needs no credentials
/// and the URL has a compiled-in default, so loading cannot fail.
pub fn load() -> Config {
    let api_url = env::var("ASK_ME_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    Config { api_url }
}
