use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::core::timezone::DisplayZone;
use crate::core::{DeletableRecord, Result};
use crate::lifecycle::{ConfirmationGate, Notification, NotificationLevel, Notifier};

const MAX_CELL: usize = 40;

/// Line reader over stdin shared by the console loop and the confirmation prompt
#[derive(Clone)]
pub struct TerminalInput {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
}

impl TerminalInput {
    pub fn stdin() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Print `prompt` and read one line; `None` on end of input
    pub async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let line = self.lines.lock().await.next_line().await?;
        Ok(line)
    }
}

/// `y/N` prompt on the terminal; anything but yes declines
pub struct TerminalGate {
    input: TerminalInput,
}

impl TerminalGate {
    pub fn new(input: TerminalInput) -> Self {
        Self { input }
    }
}

#[async_trait]
impl ConfirmationGate for TerminalGate {
    async fn confirm(&self, message: &str) -> bool {
        match self.input.read_line(&format!("{} [y/N] ", message)).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation; treating as no");
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Prints successes to stdout and errors to stderr
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("ok: {}", notification.message),
            NotificationLevel::Error => eprintln!("error: {}", notification.message),
        }
    }
}

/// Render records as a fixed-width table
///
/// `columns` picks display fields; when empty, every field present on any record is used.
pub fn render_table(records: &[DeletableRecord], columns: &[&str], zone: &DisplayZone) -> String {
    if records.is_empty() {
        return "(no records)\n".to_string();
    }

    let columns: Vec<String> = if columns.is_empty() {
        records
            .iter()
            .flat_map(|r| r.fields.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    } else {
        columns.iter().map(|c| c.to_string()).collect()
    };
    let show_deleted_at = records.iter().any(|r| r.is_deleted());

    let mut header = vec!["id".to_string()];
    header.extend(columns.iter().cloned());
    if show_deleted_at {
        header.push("deleted at".to_string());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let mut row = vec![record.id.clone()];
            row.extend(
                columns
                    .iter()
                    .map(|c| truncate(record.field(c).unwrap_or("-"))),
            );
            if show_deleted_at {
                row.push(
                    record
                        .deleted_at
                        .map(|at| zone.format(at))
                        .unwrap_or_else(|| "-".to_string()),
                );
            }
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    push_row(
        &mut out,
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    );
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(value: &str) -> String {
    if value.chars().count() > MAX_CELL {
        let cut: String = value.chars().take(MAX_CELL - 3).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}
