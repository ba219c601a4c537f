// Interactive form session reading line-oriented input from stdin
use crate::presentation::board::IndicatorBoard;
use crate::presentation::terminal::{TerminalListView, TerminalNotifier};
use crate::presentation::view::Notifier;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load the indicator list.";

const HELP_TEXT: &str = "Commands: add <name>, remove <name>, list, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    List,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

/// Split a submitted line into a verb and the single form field. The field
/// is the remainder of the line; trimming happens when the mutation request
/// is built.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let (verb, field) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, field)) => (verb, field),
        None => (trimmed, ""),
    };

    match verb {
        "add" => Command::Add(field.to_string()),
        "remove" => Command::Remove(field.to_string()),
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Run the form session: fetch and render once on entry, then process
/// submissions until stdin closes or the user quits. Submissions are handled
/// one at a time in the order entered.
pub async fn run_session(
    mut board: IndicatorBoard<TerminalListView, TerminalNotifier>,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let mut page_notifier = TerminalNotifier::new();

    match board.refresh().await {
        Ok(()) => board.view().draw(&mut stdout)?,
        Err(error) => {
            tracing::warn!("Initial list fetch failed: {}", error);
            page_notifier.alert(LOAD_FAILURE_MESSAGE);
        }
    }
    println!("{HELP_TEXT}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Add(field) => {
                if board.submit_add(&field).await.is_ok() {
                    board.view().draw(&mut stdout)?;
                }
            }
            Command::Remove(field) => {
                if board.submit_remove(&field).await.is_ok() {
                    board.view().draw(&mut stdout)?;
                }
            }
            Command::List => match board.refresh().await {
                Ok(()) => board.view().draw(&mut stdout)?,
                Err(error) => {
                    tracing::warn!("List fetch failed: {}", error);
                    page_notifier.alert(LOAD_FAILURE_MESSAGE);
                }
            },
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => break,
            Command::Unknown(verb) => println!("Unknown command `{verb}`; type `help`."),
            Command::Empty => {}
        }
    }

    Ok(())
}
