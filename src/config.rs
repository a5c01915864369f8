//! Runtime configuration
//!
//! Resolution order for each setting: CLI flag, then environment variable,
//! then built-in default. Endpoints point at a local retrieval service by
//! default.

use crate::cli::Args;

pub const DEFAULT_VECTOR_URL: &str = "http://127.0.0.1:8000/api/vector-search";
pub const DEFAULT_GRAPH_URL: &str = "http://127.0.0.1:8000/api/graphrag-search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NARROW_THRESHOLD: u16 = 100;
pub const DEFAULT_LOG_FILE: &str = "ragdiff.log";

pub const ENV_VECTOR_URL: &str = "RAGDIFF_VECTOR_URL";
pub const ENV_GRAPH_URL: &str = "RAGDIFF_GRAPH_URL";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub vector_url: String,
    pub graph_url: String,
    pub timeout_secs: u64,
    pub narrow_threshold: u16,
    pub log_file: String,
}

impl Config {
    /// Resolve configuration from parsed arguments and the environment
    pub fn from_args(args: &Args) -> Self {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolution with an injectable environment lookup
    fn resolve<F: Fn(&str) -> Option<String>>(args: &Args, env: F) -> Self {
        Config {
            vector_url: args
                .vector_url
                .clone()
                .or_else(|| env(ENV_VECTOR_URL))
                .unwrap_or_else(|| DEFAULT_VECTOR_URL.to_string()),
            graph_url: args
                .graph_url
                .clone()
                .or_else(|| env(ENV_GRAPH_URL))
                .unwrap_or_else(|| DEFAULT_GRAPH_URL.to_string()),
            timeout_secs: args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            narrow_threshold: args.narrow.unwrap_or(DEFAULT_NARROW_THRESHOLD),
            log_file: args
                .log_file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(&Args::default(), |_| None)
    }
}
