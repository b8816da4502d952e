use clap::Parser;

/// Neighborhood watch incident board.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Address to bind the HTTP server
    #[arg(long, env = "BOARD_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: String,

    /// Key for the generative language API
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the generative language API
    #[arg(long, env = "GEMINI_URL", default_value = llm::DEFAULT_BASE_URL)]
    pub gemini_url: String,

    /// Model used for classification and safety tips
    #[arg(long, env = "GEMINI_MODEL", default_value = llm::DEFAULT_MODEL)]
    pub model: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "BOARD_LOG", default_value = "info")]
    pub log_level: String,
}
