use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_TILE_URL: &str =
    "https://cartodb-basemaps-{s}.global.ssl.fastly.net/light_all/{z}/{x}/{y}.png";

/// Command line / environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "estate_map", version, about = "Map and table of real-estate listings")]
pub struct Config {
    /// URL of the listings feed (JSON with `estates` and `info`)
    #[arg(long, env = "ESTATES_DATA_URL")]
    pub data_url: String,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Maximum number of worker threads serving requests
    #[arg(long, env = "WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Transport timeout for the listings fetch, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// XYZ tile template for the map background
    #[arg(long, env = "TILE_URL", default_value = DEFAULT_TILE_URL)]
    pub tile_url: String,
}
