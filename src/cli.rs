//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use harvester_core::catalog::DEFAULT_INDEX_URL;
use harvester_core::fetch::{CONNECT_TIMEOUT_SECS, FetchConfig, REQUEST_TIMEOUT_SECS};

/// Harvest Flesh and Blood card records from the publisher's collector catalog.
///
/// Discovers every set page on the collector-centre index, fetches them all
/// concurrently, and reports the card records it could build.
#[derive(Parser, Debug)]
#[command(name = "fab-harvester")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Catalog index page listing one link per set
    #[arg(long, default_value = DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// JSON file mapping set codes to set names (replaces the built-in table)
    #[arg(long, value_name = "PATH")]
    pub set_codes: Option<PathBuf>,

    /// Per-request timeout in seconds (1-300)
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,

    /// Connect timeout in seconds (1-120)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub connect_timeout: u64,

    /// Verify TLS certificates (verification is relaxed by default)
    #[arg(long)]
    pub strict_tls: bool,

    /// Append log lines ("HH:MM:SS - Level: message") to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write harvested records to this file as JSON
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Save harvested records to this SQLite database (created if missing)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

impl Args {
    /// Builds the fetch configuration shared by index and set-page requests.
    #[must_use]
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout),
            request_timeout: Duration::from_secs(self.timeout),
            accept_invalid_certs: !self.strict_tls,
            ..FetchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["fab-harvester"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.index_url, DEFAULT_INDEX_URL);
        assert_eq!(args.timeout, REQUEST_TIMEOUT_SECS);
        assert_eq!(args.connect_timeout, CONNECT_TIMEOUT_SECS);
        assert!(!args.strict_tls);
        assert!(args.set_codes.is_none());
        assert!(args.output.is_none());
        assert!(args.db.is_none());
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["fab-harvester", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["fab-harvester", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["fab-harvester", "--quiet"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["fab-harvester", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["fab-harvester", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_timeout_range() {
        let args = Args::try_parse_from(["fab-harvester", "--timeout", "300"]).unwrap();
        assert_eq!(args.timeout, 300);

        let err = Args::try_parse_from(["fab-harvester", "--timeout", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let err = Args::try_parse_from(["fab-harvester", "--timeout", "301"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_fetch_config_from_flags() {
        let args = Args::try_parse_from([
            "fab-harvester",
            "--timeout",
            "12",
            "--connect-timeout",
            "3",
            "--strict-tls",
        ])
        .unwrap();
        let config = args.fetch_config();
        assert_eq!(config.request_timeout, Duration::from_secs(12));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_cli_paths() {
        let args = Args::try_parse_from([
            "fab-harvester",
            "--set-codes",
            "codes.json",
            "-o",
            "cards.json",
            "--db",
            "cards.db",
            "--log-file",
            "log.txt",
        ])
        .unwrap();
        assert_eq!(args.set_codes, Some(PathBuf::from("codes.json")));
        assert_eq!(args.output, Some(PathBuf::from("cards.json")));
        assert_eq!(args.db, Some(PathBuf::from("cards.db")));
        assert_eq!(args.log_file, Some(PathBuf::from("log.txt")));
    }
}
