//! CLI argument parsing tests.

use backand::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_cli_parses_token_subcommand() {
    let cli = Cli::parse_from(["backand", "token"]);

    assert!(!cli.json);
    assert!(matches!(cli.command, Command::Token));
}

#[test]
fn test_cli_parses_create_subcommand() {
    let cli = Cli::parse_from(["backand", "create", "items", r#"{"name":"widget"}"#]);

    match cli.command {
        Command::Create { object_type, data } => {
            assert_eq!(object_type, "items");
            assert_eq!(data, r#"{"name":"widget"}"#);
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn test_list_defaults() {
    let cli = Cli::parse_from(["backand", "list", "items"]);

    match cli.command {
        Command::List {
            object_type,
            page_size,
            page_number,
            auth,
        } => {
            assert_eq!(object_type, "items");
            assert_eq!(page_size, 20);
            assert_eq!(page_number, 1);
            assert!(!auth);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_pagination_args() {
    let cli = Cli::parse_from([
        "backand",
        "list",
        "items",
        "--page-size",
        "10",
        "--page-number",
        "2",
        "--auth",
    ]);

    match cli.command {
        Command::List {
            page_size,
            page_number,
            auth,
            ..
        } => {
            assert_eq!(page_size, 10);
            assert_eq!(page_number, 2);
            assert!(auth);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["backand", "get", "items", "42"]);

    match cli.command {
        Command::Get {
            object_type,
            id,
            auth,
        } => {
            assert_eq!(object_type, "items");
            assert_eq!(id, "42");
            assert!(!auth);
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_global_json_flag() {
    // --json before subcommand
    let cli = Cli::parse_from(["backand", "--json", "list", "items"]);
    assert!(cli.json);

    // --json after subcommand (global flag)
    let cli = Cli::parse_from(["backand", "get", "items", "1", "--json"]);
    assert!(cli.json);
}

#[test]
fn test_create_requires_data() {
    let result = Cli::try_parse_from(["backand", "create", "items"]);
    assert!(result.is_err());
}
