use clap::Parser;

use super::args::{CliArgs, Command, OutputFormat, Scope};

#[test]
fn test_parses_subcommand_with_defaults() {
    let args = CliArgs::try_parse_from(["nomina", "chain", "Dog"]).expect("chain should parse");

    assert_eq!(
        args.command,
        Command::Chain {
            class: "Dog".to_string()
        }
    );
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.config.is_none());
    assert!(args.index.is_none());
    assert!(args.scope.is_none());
    assert!(args.max_chain_depth.is_none());
    assert!(!args.ignore_case);
    assert!(!args.stats);
}

#[test]
fn test_parses_global_flags_after_subcommand() {
    let args = CliArgs::try_parse_from([
        "nomina",
        "field",
        "Dog",
        "name",
        "--index",
        "index.json",
        "--scope",
        "project",
        "--maxChainDepth",
        "8",
        "--format",
        "json",
        "--stats",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.command.class(), "Dog");
    assert_eq!(
        args.index.as_deref(),
        Some(std::path::Path::new("index.json"))
    );
    assert_eq!(args.scope, Some(Scope::Project));
    assert_eq!(args.max_chain_depth, Some(8));
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.stats);
}

#[test]
fn test_parses_field_type_subcommand_name() {
    let args = CliArgs::try_parse_from(["nomina", "field-type", "Dog", "hp"])
        .expect("field-type should parse");
    assert_eq!(
        args.command,
        Command::FieldType {
            class: "Dog".to_string(),
            name: "hp".to_string()
        }
    );
}

#[test]
fn test_parses_complete_options() {
    let args = CliArgs::try_parse_from([
        "nomina",
        "complete",
        "Dog",
        "--prefix",
        "ba",
        "--as-field",
        "--ignore-case",
    ])
    .expect("complete should parse");

    assert_eq!(
        args.command,
        Command::Complete {
            class: "Dog".to_string(),
            prefix: "ba".to_string(),
            as_field: true,
        }
    );
    assert!(args.ignore_case);
}

#[test]
fn test_accepts_scope_aliases() {
    for value in ["projectAndLibraries", "project-and-libraries", "all"] {
        let args = CliArgs::try_parse_from(["nomina", "--scope", value, "chain", "A"])
            .unwrap_or_else(|err| panic!("scope {value} should parse: {err}"));
        assert_eq!(args.scope, Some(Scope::ProjectAndLibraries));
    }
}

#[test]
fn test_rejects_missing_subcommand() {
    assert!(CliArgs::try_parse_from(["nomina"]).is_err());
}

#[test]
fn test_rejects_unknown_format() {
    assert!(CliArgs::try_parse_from(["nomina", "chain", "A", "--format", "xml"]).is_err());
}
