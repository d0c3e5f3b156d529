//! CLI argument parsing and output format tests

use clap::Parser;

use darkflix::cli::{Cli, Command, ExitCode, JsonOutput, KindFilter};

// =============================================================================
// Argument Parsing
// =============================================================================

#[test]
fn test_no_args_is_tui_mode() {
    let cli = Cli::parse_from(["darkflix"]);
    assert!(!cli.is_cli_mode());
    assert!(cli.command.is_none());
}

#[test]
fn test_catalog_with_kind_filter() {
    let cli = Cli::parse_from(["darkflix", "catalog", "--kind", "series"]);
    match cli.command {
        Some(Command::Catalog(cmd)) => assert_eq!(cmd.kind, Some(KindFilter::Series)),
        _ => panic!("Expected Catalog command"),
    }
}

#[test]
fn test_catalog_alias() {
    let cli = Cli::parse_from(["darkflix", "cat"]);
    assert!(matches!(cli.command, Some(Command::Catalog(_))));
}

#[test]
fn test_resolve_requires_numeric_id() {
    assert!(Cli::try_parse_from(["darkflix", "resolve", "not-a-number"]).is_err());
    assert!(Cli::try_parse_from(["darkflix", "resolve"]).is_err());

    let cli = Cli::parse_from(["darkflix", "resolve", "1396"]);
    match cli.command {
        Some(Command::Resolve(cmd)) => assert_eq!(cmd.id, 1396),
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_favorites_list_and_toggle_forms() {
    let cli = Cli::parse_from(["darkflix", "favorites"]);
    match cli.command {
        Some(Command::Favorites(cmd)) => assert!(cmd.toggle.is_none()),
        _ => panic!("Expected Favorites command"),
    }

    let cli = Cli::parse_from(["darkflix", "fav", "-t", "42"]);
    match cli.command {
        Some(Command::Favorites(cmd)) => assert_eq!(cmd.toggle, Some(42)),
        _ => panic!("Expected Favorites command"),
    }
}

#[test]
fn test_config_path_flag() {
    let cli = Cli::parse_from(["darkflix", "-c", "/tmp/custom.toml", "catalog"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/custom.toml"))
    );
}

// =============================================================================
// JSON Output Format
// =============================================================================

#[test]
fn test_json_output_success_shape() {
    let output = JsonOutput::success(vec![1u64, 2, 3]);
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    // Zero exit code and absent error are omitted entirely
    assert!(json.get("error").is_none());
    assert!(json.get("exit_code").is_none());
}

#[test]
fn test_json_output_error_shape() {
    let output = JsonOutput::<()>::error_msg("title 5 not found", ExitCode::NotFound);
    let json = serde_json::to_value(&output).unwrap();

    assert!(json.get("data").is_none());
    assert_eq!(json["error"], "title 5 not found");
    assert_eq!(json["exit_code"], 4);
}
