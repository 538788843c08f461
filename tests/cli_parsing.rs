//! CLI argument parsing tests.

use clap::Parser;
use parampool::cli::{Cli, Commands};

#[test]
fn test_parse_allocate_full() {
    let cli = Cli::try_parse_from(vec![
        "parampool",
        "allocate",
        "VM",
        "--values",
        "vm[1..5], spare",
        "--job",
        "nightly-deploy",
        "--number",
        "42",
        "--jobs",
        "nightly-deploy,smoke-deploy",
        "--prefer-error",
        "--export",
    ])
    .unwrap();

    match cli.command {
        Commands::Allocate(args) => {
            assert_eq!(args.name, "VM");
            assert_eq!(args.values, "vm[1..5], spare");
            assert_eq!(args.job, "nightly-deploy");
            assert_eq!(args.number, 42);
            assert_eq!(args.jobs, vec!["nightly-deploy", "smoke-deploy"]);
            assert!(args.prefer_error);
            assert!(args.export);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_allocate_defaults() {
    let cli = Cli::try_parse_from(vec![
        "parampool",
        "allocate",
        "VM",
        "--values",
        "vm1",
        "--job",
        "deploy",
        "--number",
        "1",
    ])
    .unwrap();

    match cli.command {
        Commands::Allocate(args) => {
            assert!(args.jobs.is_empty());
            assert!(!args.prefer_error);
            assert!(!args.export);
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_allocate_reads_job_and_number_from_env() {
    temp_env::with_vars(
        vec![
            ("PARAMPOOL_JOB", Some("env-deploy")),
            ("PARAMPOOL_NUMBER", Some("12")),
        ],
        || {
            let cli =
                Cli::try_parse_from(vec!["parampool", "allocate", "VM", "--values", "vm1"])
                    .unwrap();

            match cli.command {
                Commands::Allocate(args) => {
                    assert_eq!(args.job, "env-deploy");
                    assert_eq!(args.number, 12);
                }
                _ => panic!("Wrong top-level command"),
            }
        },
    );
}

#[test]
fn test_parse_allocate_requires_job_and_number() {
    temp_env::with_vars_unset(vec!["PARAMPOOL_JOB", "PARAMPOOL_NUMBER"], || {
        let result = Cli::try_parse_from(vec!["parampool", "allocate", "VM", "--values", "vm1"]);
        assert!(result.is_err());
    });
}

#[test]
fn test_parse_start() {
    let cli = Cli::try_parse_from(vec![
        "parampool", "start", "--job", "deploy", "--number", "3",
    ])
    .unwrap();

    match cli.command {
        Commands::Start(args) => {
            assert_eq!(args.job, "deploy");
            assert_eq!(args.number, 3);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_finish_takes_the_result_positionally() {
    let cli = Cli::try_parse_from(vec![
        "parampool", "finish", "failure", "--job", "deploy", "--number", "3",
    ])
    .unwrap();

    match cli.command {
        Commands::Finish(args) => {
            assert_eq!(args.result, "failure");
            assert_eq!(args.job, "deploy");
            assert_eq!(args.number, 3);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_history_defaults() {
    let cli = Cli::try_parse_from(vec!["parampool", "history"]).unwrap();

    match cli.command {
        Commands::History(args) => {
            assert!(args.job.is_none());
            assert_eq!(args.limit, 20);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_history_with_job_filter() {
    let cli = Cli::try_parse_from(vec![
        "parampool", "history", "--job", "deploy", "--limit", "5",
    ])
    .unwrap();

    match cli.command {
        Commands::History(args) => {
            assert_eq!(args.job.as_deref(), Some("deploy"));
            assert_eq!(args.limit, 5);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_expand() {
    let cli = Cli::try_parse_from(vec!["parampool", "expand", "vm[3..1]"]).unwrap();

    match cli.command {
        Commands::Expand(args) => assert_eq!(args.values, "vm[3..1]"),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(vec![
        "parampool",
        "expand",
        "vm[1..2]",
        "--json",
        "--config",
        "custom.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("custom.yaml"))
    );
}

#[test]
fn test_parse_init_defaults() {
    let cli = Cli::try_parse_from(vec!["parampool", "init"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(!args.force);
            assert_eq!(args.path, std::path::PathBuf::from("."));
        }
        _ => panic!("Wrong top-level command"),
    }
}
