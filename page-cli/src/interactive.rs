//! Interactive session: a line-oriented form over the document list.

use anyhow::{Context, Result};
use page_estimator::{App, RunState};
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info, warn};

use crate::presenter::{render_documents, render_state, render_stats};

/// Line that ends multi-line content entry.
pub const CONTENT_TERMINATOR: &str = ".";

pub const HELP: &str = "\
Commands:
  list                 show documents
  add                  append a blank document
  remove N             remove document N (the last one cannot be removed)
  title N TEXT         set the title of document N
  content N            enter content for document N, end with a line containing only '.'
  load N PATH          read content for document N from a file
  process              estimate pages, generate the title and token
  copy                 print the token of the last run
  stats                show cumulative statistics
  help                 show this help
  quit                 leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Add,
    Remove(usize),
    Title(usize, String),
    Content(usize),
    Load(usize, String),
    Process,
    Copy,
    Stats,
    Help,
    Quit,
}

/// Parses one input line. Document numbers are 1-based on input and 0-based in the result.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(ReplCommand::List),
        "add" => Ok(ReplCommand::Add),
        "remove" | "rm" => Ok(ReplCommand::Remove(parse_index(rest)?)),
        "title" => {
            let (n, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Ok(ReplCommand::Title(parse_index(n)?, text.trim().to_string()))
        }
        "content" => Ok(ReplCommand::Content(parse_index(rest)?)),
        "load" => {
            let (n, path) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: load N PATH".to_string())?;
            Ok(ReplCommand::Load(parse_index(n)?, path.trim().to_string()))
        }
        "process" | "run" => Ok(ReplCommand::Process),
        "copy" => Ok(ReplCommand::Copy),
        "stats" => Ok(ReplCommand::Stats),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

fn parse_index(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a document number, got {raw:?}")),
    }
}

/// Runs the session on stdin/stdout until `quit` or end of input.
pub async fn run(mut app: App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();
    println!("{}", HELP);
    print!("{}", render_documents(app.documents()));

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                if !msg.is_empty() {
                    println!("{msg}");
                }
                continue;
            }
        };
        if command == ReplCommand::Quit {
            break;
        }
        debug!(?command, "Interactive command");
        if let Err(e) = execute(&mut app, command, &mut lines, &mut stdout, Instant::now()).await {
            warn!(error = %e, "Interactive command failed");
            println!("{e}");
        }
    }
    info!("Interactive session ended");
    Ok(())
}

/// Executes one command against `app`, reading multi-line content from `lines` and writing to `out`.
///
/// A command issued within the copy acknowledgement window of the last `copy` is prefixed with
/// a `(token copied)` line.
pub async fn execute<R, W>(
    app: &mut App,
    command: ReplCommand,
    lines: &mut Lines<R>,
    out: &mut W,
    now: Instant,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if command != ReplCommand::Copy && app.copy_acknowledged(now) {
        writeln!(out, "(token copied)")?;
    }
    match command {
        ReplCommand::List => write!(out, "{}", render_documents(app.documents()))?,
        ReplCommand::Add => {
            app.add_document();
            write!(out, "{}", render_documents(app.documents()))?;
        }
        ReplCommand::Remove(index) => {
            let id = document_at(app, index)?;
            app.remove_document(id)?;
            write!(out, "{}", render_documents(app.documents()))?;
        }
        ReplCommand::Title(index, text) => {
            let id = document_at(app, index)?;
            app.update_title(id, text)?;
        }
        ReplCommand::Content(index) => {
            let id = document_at(app, index)?;
            writeln!(out, "Enter content, finish with a line containing only '{CONTENT_TERMINATOR}':")?;
            out.flush()?;
            let mut content = Vec::new();
            while let Some(line) = lines.next_line().await? {
                if line == CONTENT_TERMINATOR {
                    break;
                }
                content.push(line);
            }
            app.update_content(id, content.join("\n"))?;
            write!(out, "{}", render_documents(app.documents()))?;
        }
        ReplCommand::Load(index, path) => {
            let id = document_at(app, index)?;
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Read {path}"))?;
            app.update_content(id, content)?;
            write!(out, "{}", render_documents(app.documents()))?;
        }
        ReplCommand::Process => {
            write!(out, "{}", render_state(&RunState::Running))?;
            out.flush()?;
            let state = app.process().await;
            write!(out, "{}", render_state(state))?;
        }
        ReplCommand::Copy => match app.copy_token(now) {
            Some(token) => writeln!(out, "{token}\nCopied!")?,
            None => writeln!(out, "No token yet; run 'process' first.")?,
        },
        ReplCommand::Stats => write!(out, "{}", render_stats(&app.counters().await))?,
        ReplCommand::Help => writeln!(out, "{}", HELP)?,
        ReplCommand::Quit => {}
    }
    Ok(())
}

fn document_at(app: &App, index: usize) -> Result<page_core::DocumentId> {
    app.document_id_at(index)
        .ok_or_else(|| anyhow::anyhow!("no document {}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_commands() {
        assert_eq!(parse_command("list"), Ok(ReplCommand::List));
        assert_eq!(parse_command("  ADD "), Ok(ReplCommand::Add));
        assert_eq!(parse_command("process"), Ok(ReplCommand::Process));
        assert_eq!(parse_command("q"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn document_numbers_are_one_based() {
        assert_eq!(parse_command("remove 2"), Ok(ReplCommand::Remove(1)));
        assert_eq!(parse_command("content 1"), Ok(ReplCommand::Content(0)));
        assert!(parse_command("remove 0").is_err());
        assert!(parse_command("remove x").is_err());
    }

    #[test]
    fn title_keeps_inner_spaces() {
        assert_eq!(
            parse_command("title 3 Annual  Report 2026"),
            Ok(ReplCommand::Title(2, "Annual  Report 2026".to_string()))
        );
        assert_eq!(parse_command("title 1"), Ok(ReplCommand::Title(0, String::new())));
    }

    #[test]
    fn load_requires_path() {
        assert_eq!(
            parse_command("load 1 ./a b.txt"),
            Ok(ReplCommand::Load(0, "./a b.txt".to_string()))
        );
        assert!(parse_command("load 1").is_err());
    }

    #[test]
    fn unknown_and_empty() {
        assert!(parse_command("frobnicate").unwrap_err().contains("unknown command"));
        assert_eq!(parse_command("   "), Err(String::new()));
    }

    mod session {
        use crate::interactive::*;
        use async_trait::async_trait;
        use chrono::NaiveDate;
        use llm_client::LlmClient;
        use mockall::mock;
        use page_estimator::{Processor, StatisticsLedger, TitleSynthesizer, COPY_ACK_WINDOW};
        use std::sync::Arc;
        use std::time::Duration;
        use storage::InMemoryKeyValueStore;

        mock! {
            pub Llm {}

            #[async_trait]
            impl LlmClient for Llm {
                async fn generate_content(&self, model: &str, prompt: &str) -> anyhow::Result<String>;
            }
        }

        async fn app_replying(reply: &'static str) -> App {
            let mut llm = MockLlm::new();
            llm.expect_generate_content()
                .returning(move |_, _| Ok(reply.to_string()));
            let store = Arc::new(InMemoryKeyValueStore::new());
            let ledger =
                StatisticsLedger::start_session(store, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
                    .await
                    .unwrap();
            App::new(Processor::new(TitleSynthesizer::new(Arc::new(llm)), ledger))
        }

        fn input(text: &'static str) -> Lines<BufReader<&'static [u8]>> {
            BufReader::new(text.as_bytes()).lines()
        }

        async fn exec(
            app: &mut App,
            command: ReplCommand,
            lines: &mut Lines<BufReader<&'static [u8]>>,
            now: Instant,
        ) -> (Result<()>, String) {
            let mut out = Vec::new();
            let result = execute(app, command, lines, &mut out, now).await;
            (result, String::from_utf8(out).unwrap())
        }

        #[tokio::test]
        async fn content_stops_at_terminator() {
            let mut app = app_replying("unused").await;
            let mut lines = input("first line\nsecond line\n.\nlist\n");

            let (result, _) = exec(&mut app, ReplCommand::Content(0), &mut lines, Instant::now()).await;

            assert!(result.is_ok());
            assert_eq!(app.documents()[0].content, "first line\nsecond line");
            assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("list"));
        }

        #[tokio::test]
        async fn content_ends_at_end_of_input() {
            let mut app = app_replying("unused").await;
            let mut lines = input("only line\n");

            let (result, _) = exec(&mut app, ReplCommand::Content(0), &mut lines, Instant::now()).await;

            assert!(result.is_ok());
            assert_eq!(app.documents()[0].content, "only line");
        }

        #[tokio::test]
        async fn last_document_cannot_be_removed() {
            let mut app = app_replying("unused").await;
            let mut lines = input("");

            let (result, _) = exec(&mut app, ReplCommand::Remove(0), &mut lines, Instant::now()).await;

            assert!(result.is_err());
            assert_eq!(app.documents().len(), 1);
        }

        #[tokio::test]
        async fn unknown_document_number_is_an_error() {
            let mut app = app_replying("unused").await;
            let mut lines = input("");

            let (result, _) = exec(&mut app, ReplCommand::Title(4, "x".into()), &mut lines, Instant::now()).await;

            assert_eq!(result.unwrap_err().to_string(), "no document 5");
        }

        #[tokio::test]
        async fn copy_before_any_run() {
            let mut app = app_replying("unused").await;
            let mut lines = input("");

            let (result, out) = exec(&mut app, ReplCommand::Copy, &mut lines, Instant::now()).await;

            assert!(result.is_ok());
            assert!(out.contains("No token yet"));
            assert!(!out.contains("Copied!"));
        }

        #[tokio::test]
        async fn copy_acknowledgement_shows_on_next_command_within_window() {
            let mut app = app_replying("Combined").await;
            let mut lines = input("");
            let start = Instant::now();

            exec(&mut app, ReplCommand::Title(0, "Chapter".into()), &mut lines, start).await.0.unwrap();
            exec(&mut app, ReplCommand::Content(0), &mut input("0123456789\n.\n"), start)
                .await
                .0
                .unwrap();
            let (_, processed) = exec(&mut app, ReplCommand::Process, &mut lines, start).await;
            assert!(processed.contains("푸코/2045/Combined/1/1/3"));

            let (_, copied) = exec(&mut app, ReplCommand::Copy, &mut lines, start).await;
            assert_eq!(copied, "푸코/2045/Combined/1/1/3\nCopied!\n");

            let (_, soon) = exec(&mut app, ReplCommand::List, &mut lines, start + Duration::from_secs(1)).await;
            assert!(soon.starts_with("(token copied)\n"));

            let later = start + COPY_ACK_WINDOW + Duration::from_millis(1);
            let (_, after) = exec(&mut app, ReplCommand::List, &mut lines, later).await;
            assert!(!after.contains("(token copied)"));
        }
    }
}
