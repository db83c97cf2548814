//! CLI argument parsing tests
//!
//! These tests define the expected CLI interface.

use clap::Parser;
use ebay_finding::cli::{Cli, Command, Format};
use ebay_finding::GlobalId;

#[test]
fn test_cli_parses_search_subcommand() {
    let cli = Cli::parse_from(["ebay-finding", "--app-id", "app", "search", "djm", "900"]);

    assert!(!cli.json);
    assert_eq!(cli.app_id.as_deref(), Some("app"));
    match cli.command {
        Command::Search { query, bin_only } => {
            assert_eq!(query.keywords(), "djm 900");
            assert_eq!(query.site, GlobalId::Us);
            assert_eq!(query.count, 10);
            assert!(!bin_only);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_cli_parses_sold_subcommand() {
    let cli = Cli::parse_from([
        "ebay-finding",
        "sold",
        "technics 1210",
        "--site",
        "de",
        "-n",
        "25",
    ]);

    match cli.command {
        Command::Sold { query } => {
            assert_eq!(query.keywords(), "technics 1210");
            assert_eq!(query.site, GlobalId::De);
            assert_eq!(query.count, 25);
        }
        _ => panic!("Expected Sold command"),
    }
}

#[test]
fn test_completed_alias() {
    let cli = Cli::parse_from(["ebay-finding", "completed", "x"]);
    assert!(matches!(cli.command, Command::Sold { .. }));
}

#[test]
fn test_bin_only_flag() {
    let cli = Cli::parse_from(["ebay-finding", "search", "x", "--bin-only"]);
    assert!(matches!(cli.command, Command::Search { bin_only: true, .. }));
}

#[test]
fn test_site_accepts_wire_code() {
    let cli = Cli::parse_from(["ebay-finding", "search", "x", "--site", "EBAY-ES"]);
    match cli.command {
        Command::Search { query, .. } => assert_eq!(query.site, GlobalId::Es),
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_unknown_site_is_rejected() {
    let result = Cli::try_parse_from(["ebay-finding", "search", "x", "--site", "jp"]);
    assert!(result.is_err());
}

#[test]
fn test_keywords_are_required() {
    let result = Cli::try_parse_from(["ebay-finding", "search"]);
    assert!(result.is_err());
}

#[test]
fn test_global_json_flag() {
    // --json before subcommand
    let cli = Cli::parse_from(["ebay-finding", "--json", "search", "x"]);
    assert!(cli.json);
    assert_eq!(cli.output_format(), Format::Json);

    // --json after subcommand (global flag)
    let cli = Cli::parse_from(["ebay-finding", "search", "x", "--json"]);
    assert_eq!(cli.output_format(), Format::Json);
}

#[test]
fn test_format_flag() {
    let cli = Cli::parse_from(["ebay-finding", "sold", "x", "--format", "pretty"]);
    assert_eq!(cli.output_format(), Format::Pretty);

    let cli = Cli::parse_from(["ebay-finding", "sold", "x"]);
    assert_eq!(cli.output_format(), Format::Table);
}

#[test]
fn test_endpoint_override() {
    let cli = Cli::parse_from([
        "ebay-finding",
        "--endpoint",
        "http://localhost:8080/v1",
        "search",
        "x",
    ]);
    assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8080/v1"));
}
