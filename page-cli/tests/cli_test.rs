//! Integration tests for the hwp-pages CLI surface: argument parsing, file input, rendering.

use chrono::NaiveDate;
use clap::Parser;
use page_cli::input::ContentSource;
use page_cli::presenter::{render_outcome, render_outcome_json, render_state, render_stats};
use page_cli::{load_documents, Cli, Commands};
use page_core::{estimate_all, AuthenticationToken, Document};
use page_estimator::{PersistentCounters, ProcessError, ProcessOutcome, RunState};
use std::io::Write;

fn counters() -> PersistentCounters {
    PersistentCounters {
        cumulative_days: 2046,
        last_visit_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        total_sessions: 12,
        total_pages_read: 1234,
    }
}

/// **Test: `process` accepts titled and untitled specs plus global flags after the subcommand.**
#[test]
fn test_parse_process_command() {
    let cli = Cli::try_parse_from([
        "hwp-pages",
        "process",
        "Intro=intro.txt",
        "body.txt",
        "--json",
        "--ephemeral",
    ])
    .expect("parses");

    assert!(cli.ephemeral);
    match cli.command {
        Commands::Process { documents, json } => {
            assert!(json);
            assert_eq!(documents.len(), 2);
            assert_eq!(documents[0].title, "Intro");
            assert_eq!(documents[1].title, "");
            assert!(matches!(documents[1].source, ContentSource::File(_)));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

/// **Test: `process` without documents is a usage error.**
#[test]
fn test_process_requires_documents() {
    assert!(Cli::try_parse_from(["hwp-pages", "process"]).is_err());
}

/// **Test: Files are read in order with their titles.**
#[test]
fn test_load_documents_from_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::File::create(&a).unwrap().write_all("가".repeat(1921).as_bytes()).unwrap();
    std::fs::File::create(&b).unwrap().write_all(b"").unwrap();

    let specs = vec![
        page_cli::parse_document_spec(&format!("First={}", a.display())).unwrap(),
        page_cli::parse_document_spec(b.to_str().unwrap()).unwrap(),
    ];
    let docs = load_documents(&specs).expect("loads");

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].title, "First");
    assert_eq!(docs[0].content.chars().count(), 1921);
    assert_eq!(docs[1].content, "");
}

/// **Test: A missing file is reported with its path.**
#[test]
fn test_load_documents_missing_file() {
    let specs = vec![page_cli::parse_document_spec("/definitely/not/here.txt").unwrap()];
    let err = load_documents(&specs).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
}

/// **Test: The rendered outcome shows title, total, per-document lines and the token.**
#[test]
fn test_render_outcome() {
    let docs = vec![Document::new("", "x".repeat(2500)), Document::new("B", "y".repeat(10))];
    let outcome = ProcessOutcome {
        generated_title: "Sample".to_string(),
        estimate: estimate_all(&docs),
        token: AuthenticationToken::new(2046, "Sample", 2),
        counters: counters(),
    };

    let out = render_outcome(&outcome);

    assert!(out.contains("\"Sample\""));
    assert!(out.contains("2 pages"));
    assert!(out.contains("Untitled Document  2,500 chars / ~2 pages"));
    assert!(out.contains("B  10 chars / ~1 pages"));
    assert!(out.contains("푸코/2046/Sample/1/2/6"));
}

/// **Test: Failed state renders only the generic message; stats use separators.**
#[test]
fn test_render_failure_and_stats() {
    let failed = RunState::Failed(ProcessError::Failed {
        cause: "timeout".to_string(),
    });
    let out = render_state(&failed);
    assert!(!out.contains("timeout"));
    assert!(out.contains("오류"));

    let stats = render_stats(&counters());
    assert!(stats.contains("2046"));
    assert!(stats.contains("1,234"));
}

/// **Test: JSON output carries the exact token string next to its parts.**
#[test]
fn test_render_outcome_json_includes_token_text() {
    let docs = vec![Document::new("A", "x".repeat(2500))];
    let outcome = ProcessOutcome {
        generated_title: "Sample".to_string(),
        estimate: estimate_all(&docs),
        token: AuthenticationToken::new(2046, "Sample", 2),
        counters: counters(),
    };

    let json = render_outcome_json(&outcome).expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["token"]["text"], "푸코/2046/Sample/1/2/6");
    assert_eq!(value["token"]["reading_time_minutes"], 6);
    assert_eq!(value["generated_title"], "Sample");
}
