use clap::Parser;

/// Command-line and environment configuration for the gateway binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "mayfly-gateway", about = "Expiring URL shortener gateway")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "MAYFLY_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: String,

    /// Public base URL used to render short links.
    #[arg(
        long,
        env = "MAYFLY_BASE_URL",
        default_value = "http://127.0.0.1:8080/api/v1/url"
    )]
    pub base_url: String,

    /// Seconds between reaper sweeps. Zero disables the reaper; expired
    /// records are then only filtered lazily, never reclaimed.
    #[arg(long, env = "MAYFLY_REAP_INTERVAL_SECS", default_value_t = 60)]
    pub reap_interval_secs: u64,

    /// Conditional-insert attempts before a create call gives up.
    #[arg(long, env = "MAYFLY_MAX_RETRIES", default_value_t = 5)]
    pub max_retries: u32,
}
