use crate::core::timezone::DisplayZone;
use crate::core::Result;
use crate::lifecycle::{ActionOutcome, LoadState, TrashView};

use super::terminal::{render_table, TerminalInput};

const HELP: &str = "\
commands:
  list                 show the trash (with the active filter)
  search <term>        filter rows by the entity's display fields
  clear                drop the filter
  restore <id> [id..]  restore rows
  purge <id>           permanently delete a row (asks first)
  reload               fetch the trash again
  help                 this text
  quit                 leave the console";

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Search(String),
    Clear,
    Restore(Vec<String>),
    Purge(String),
    Reload,
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" | "list" | "ls" => Ok(ConsoleCommand::List),
            "search" | "find" | "/" if !rest.is_empty() => Ok(ConsoleCommand::Search(rest.to_string())),
            "search" | "find" | "/" => Err("usage: search <term>".to_string()),
            "clear" => Ok(ConsoleCommand::Clear),
            "restore" if !rest.is_empty() => Ok(ConsoleCommand::Restore(
                rest.split_whitespace().map(str::to_string).collect(),
            )),
            "restore" => Err("usage: restore <id> [id..]".to_string()),
            "purge" | "delete" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
                [id] => Ok(ConsoleCommand::Purge(id.to_string())),
                _ => Err("usage: purge <id>".to_string()),
            },
            "reload" | "refresh" => Ok(ConsoleCommand::Reload),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
            other => Err(format!("unknown command '{}' (try 'help')", other)),
        }
    }
}

/// Interactive trash view over the terminal
pub struct Console {
    view: TrashView,
    input: TerminalInput,
    zone: DisplayZone,
    columns: &'static [&'static str],
    filter: Option<String>,
}

impl Console {
    pub fn new(
        view: TrashView,
        input: TerminalInput,
        zone: DisplayZone,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            view,
            input,
            zone,
            columns,
            filter: None,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let kind = self.view.store().kind();
        self.mount().await;
        println!("{}", HELP);

        let prompt = format!("{}> ", kind);
        while let Some(line) = self.input.read_line(&prompt).await? {
            let command = match ConsoleCommand::parse(&line) {
                Ok(command) => command,
                Err(msg) => {
                    eprintln!("{}", msg);
                    continue;
                }
            };

            match command {
                ConsoleCommand::Quit => break,
                ConsoleCommand::Help => println!("{}", HELP),
                ConsoleCommand::List => self.print_rows(),
                ConsoleCommand::Search(term) => {
                    self.filter = Some(term);
                    self.print_rows();
                }
                ConsoleCommand::Clear => {
                    self.filter = None;
                    self.print_rows();
                }
                ConsoleCommand::Reload => self.mount().await,
                ConsoleCommand::Restore(ids) => {
                    for (id, outcome) in self.view.restore_many(&ids).await {
                        report_skipped(&id, &outcome);
                    }
                    self.print_rows();
                }
                ConsoleCommand::Purge(id) => {
                    let outcome = self.view.purge(&id).await;
                    report_skipped(&id, &outcome);
                    if outcome.is_success() {
                        self.print_rows();
                    }
                }
            }
        }

        tracing::debug!(entity = %kind, "Console closed");
        Ok(())
    }

    async fn mount(&self) {
        match self.view.mount().await {
            LoadState::Loaded => {
                println!(
                    "{} deleted {} record(s)",
                    self.view.store().len(),
                    self.view.store().kind()
                );
                self.print_rows();
            }
            // The view already reported the failure
            LoadState::Error(_) | LoadState::Loading => {}
        }
    }

    fn print_rows(&self) {
        let rows = match &self.filter {
            Some(term) => {
                println!("filter: \"{}\"", term);
                self.view.search(term)
            }
            None => self.view.rows(),
        };
        print!("{}", render_table(&rows, self.columns, &self.zone));
    }
}

/// Outcomes the notifier does not already report
fn report_skipped(id: &str, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Declined => println!("skipped {}: not confirmed", id),
        ActionOutcome::InFlight => println!("skipped {}: request already pending", id),
        _ => {}
    }
}
