//! CLI argument parsing
//!
//! Options: --vector-url, --graph-url, --timeout, --narrow, --log-file,
//! --version, --help. No positional arguments.

use crate::cli::{Error, Result};

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    /// Vector search endpoint override
    pub vector_url: Option<String>,

    /// GraphRAG search endpoint override
    pub graph_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Terminal width below which the panels stack
    pub narrow: Option<u16>,

    /// Log file path
    pub log_file: Option<String>,

    /// Show version and exit
    pub show_version: bool,

    /// Show help and exit
    pub show_help: bool,
}

/// Parse CLI arguments from std::env::args()
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    let mut args_out = Args::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                args_out.show_version = true;
            }
            "--help" | "-h" => {
                args_out.show_help = true;
            }
            "--vector-url" => {
                let url = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--vector-url requires a URL".to_string())
                })?;
                args_out.vector_url = Some(url);
            }
            "--graph-url" => {
                let url = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--graph-url requires a URL".to_string())
                })?;
                args_out.graph_url = Some(url);
            }
            "--timeout" => {
                let secs = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--timeout requires seconds".to_string())
                })?;
                let secs = secs
                    .parse()
                    .map_err(|_| Error::InvalidArgs(format!("Invalid timeout: {}", secs)))?;
                args_out.timeout_secs = Some(secs);
            }
            "--narrow" => {
                let cols = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--narrow requires a column count".to_string())
                })?;
                let cols = cols
                    .parse()
                    .map_err(|_| Error::InvalidArgs(format!("Invalid width: {}", cols)))?;
                args_out.narrow = Some(cols);
            }
            "--log-file" => {
                let path = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--log-file requires a path".to_string())
                })?;
                args_out.log_file = Some(path);
            }
            other => {
                return Err(Error::InvalidArgs(format!("Unknown option: {}", other)));
            }
        }
    }

    Ok(args_out)
}

/// Help text for --help
pub fn render_help() -> String {
    [
        "ragdiff - side-by-side comparison of two retrieval strategies",
        "",
        "USAGE:",
        "  ragdiff [options]",
        "",
        "OPTIONS:",
        "  --vector-url <url>   Vector search endpoint",
        "  --graph-url <url>    GraphRAG search endpoint",
        "  --timeout <secs>     Per-request timeout (default 30)",
        "  --narrow <cols>      Stack panels below this width (default 100)",
        "  --log-file <path>    Log file path (default ragdiff.log)",
        "  --version, -v        Show version",
        "  --help, -h           Show this help",
        "",
        "Endpoints may also be set via RAGDIFF_VECTOR_URL and RAGDIFF_GRAPH_URL.",
    ]
    .join("\n")
}

/// Version string for --version
pub fn render_version() -> String {
    format!("ragdiff {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("ragdiff")
            .chain(parts.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_empty_args() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed, Args::default());
    }

    #[test]
    fn test_parse_version_and_help() {
        assert!(parse_args(args(&["--version"])).unwrap().show_version);
        assert!(parse_args(args(&["-v"])).unwrap().show_version);
        assert!(parse_args(args(&["--help"])).unwrap().show_help);
        assert!(parse_args(args(&["-h"])).unwrap().show_help);
    }

    #[test]
    fn test_parse_endpoint_overrides() {
        let parsed = parse_args(args(&[
            "--vector-url",
            "http://host:9000/api/vector-search",
            "--graph-url",
            "http://host:9000/api/graphrag-search",
        ]))
        .unwrap();
        assert_eq!(
            parsed.vector_url.as_deref(),
            Some("http://host:9000/api/vector-search")
        );
        assert_eq!(
            parsed.graph_url.as_deref(),
            Some("http://host:9000/api/graphrag-search")
        );
    }

    #[test]
    fn test_parse_numeric_options() {
        let parsed = parse_args(args(&["--timeout", "10", "--narrow", "80"])).unwrap();
        assert_eq!(parsed.timeout_secs, Some(10));
        assert_eq!(parsed.narrow, Some(80));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(parse_args(args(&["--vector-url"])).is_err());
        assert!(parse_args(args(&["--timeout"])).is_err());
    }

    #[test]
    fn test_non_numeric_timeout_is_an_error() {
        assert!(parse_args(args(&["--timeout", "soon"])).is_err());
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        assert!(parse_args(args(&["--unknown"])).is_err());
        assert!(parse_args(args(&["stray"])).is_err());
    }
}
