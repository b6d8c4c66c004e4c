use std::path::PathBuf;

use super::*;

fn check_args(argv: &[&str]) -> CheckArgs {
    let mut full = vec!["compliance-guard", "check"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn check_without_paths_uses_config_list() {
    let args = check_args(&[]);
    assert!(args.paths.is_empty());
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.no_report);
    assert_eq!(args.report, None);
}

#[test]
fn check_keeps_path_order() {
    let args = check_args(&["b.py", "a.py", "c.py"]);
    assert_eq!(
        args.paths,
        vec![
            PathBuf::from("b.py"),
            PathBuf::from("a.py"),
            PathBuf::from("c.py"),
        ]
    );
}

#[test]
fn check_with_options() {
    let args = check_args(&[
        "--config",
        "custom.toml",
        "--base-dir",
        "src",
        "-f",
        "json",
        "-o",
        "out.json",
        "--report",
        "r.txt",
    ]);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.base_dir, Some(PathBuf::from("src")));
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("out.json")));
    assert_eq!(args.report, Some(PathBuf::from("r.txt")));
}

#[test]
fn report_and_no_report_conflict() {
    let result = Cli::try_parse_from([
        "compliance-guard",
        "check",
        "--report",
        "r.txt",
        "--no-report",
    ]);
    assert!(result.is_err());
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["compliance-guard", "check", "-f", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "compliance-guard",
        "check",
        "-vv",
        "--quiet",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn init_defaults() {
    let cli = Cli::parse_from(["compliance-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".compliance-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn config_validate_default_path() {
    let cli = Cli::parse_from(["compliance-guard", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".compliance-guard.toml")),
        _ => panic!("Expected config validate"),
    }
}

#[test]
fn config_show_json() {
    let cli = Cli::parse_from(["compliance-guard", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert_eq!(config, None);
            assert_eq!(format, ConfigOutputFormat::Json);
        }
        _ => panic!("Expected config show"),
    }
}
