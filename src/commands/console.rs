//! Line-oriented console used by the menu and its handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::features::reminders::Reminder;

/// Prompt/answer IO over any async reader and writer.
///
/// The binary wraps stdin/stdout; tests feed in-memory buffers.
/// Reminders that arrive while a prompt waits are printed above a fresh
/// copy of the prompt.
pub struct Console {
    reader: Box<dyn AsyncBufRead + Unpin + Send>,
    writer: Box<dyn AsyncWrite + Unpin + Send>,
    reminders: Option<UnboundedReceiver<Reminder>>,
}

impl Console {
    pub fn new<R, W>(reader: R, writer: W) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        Console {
            reader: Box::new(reader),
            writer: Box::new(writer),
            reminders: None,
        }
    }

    /// Show reminders from `rx` while waiting for answers
    pub fn with_reminders(mut self, rx: UnboundedReceiver<Reminder>) -> Self {
        self.reminders = Some(rx);
        self
    }

    /// Console bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    /// Write one line of output
    pub async fn say(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(format!("{line}\n").as_bytes())
            .await
            .context("Failed to write to console")?;
        self.writer.flush().await.context("Failed to flush console")
    }

    /// Show `prompt` and read one answer without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    pub async fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        let Console {
            reader,
            writer,
            reminders,
        } = self;

        writer
            .write_all(prompt.as_bytes())
            .await
            .context("Failed to write prompt")?;
        writer.flush().await.context("Failed to flush console")?;

        let mut line = String::new();
        let read = {
            // Polled by reference so a reminder never cancels a half-read line
            let pending = reader.read_line(&mut line);
            tokio::pin!(pending);

            loop {
                tokio::select! {
                    biased;
                    reminder = next_reminder(reminders) => match reminder {
                        Some(reminder) => {
                            writer
                                .write_all(format!("\n{reminder}\n{prompt}").as_bytes())
                                .await
                                .context("Failed to write reminder")?;
                            writer.flush().await.context("Failed to flush console")?;
                        }
                        None => *reminders = None,
                    },
                    result = &mut pending => {
                        break result.context("Failed to read from console")?;
                    }
                }
            }
        };

        if read == 0 {
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }
}

async fn next_reminder(reminders: &mut Option<UnboundedReceiver<Reminder>>) -> Option<Reminder> {
    match reminders {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::medications::MedicationEntry;
    use crate::features::reminders::{ConsoleNotifier, ReminderNotifier};
    use chrono::NaiveDate;
    use std::io::Cursor;
    use std::sync::Arc;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_prompt_keeps_answer_as_typed() {
        let (ours, mut theirs) = tokio::io::duplex(4096);
        let mut console = Console::new(Cursor::new(b"  first \r\nsecond\n".to_vec()), ours);

        assert_eq!(console.prompt("> ").await.unwrap().as_deref(), Some("  first "));
        assert_eq!(console.prompt("> ").await.unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").await.unwrap(), None);
        console.say("done").await.unwrap();
        drop(console);

        let mut output = String::new();
        theirs.read_to_string(&mut output).await.unwrap();
        assert_eq!(output, "> > > done\n");
    }

    #[tokio::test]
    async fn test_prompt_without_trailing_newline() {
        let (ours, _theirs) = tokio::io::duplex(4096);
        let mut console = Console::new(Cursor::new(b"last".to_vec()), ours);

        assert_eq!(console.prompt("").await.unwrap().as_deref(), Some("last"));
        assert_eq!(console.prompt("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_pending_reminder_is_shown_above_a_fresh_prompt() {
        let (notifier, rx) = ConsoleNotifier::channel();
        let (ours, mut theirs) = tokio::io::duplex(4096);
        let mut console = Console::new(Cursor::new(b"1\n".to_vec()), ours).with_reminders(rx);

        let entry = MedicationEntry::parse("Aspirin", "100mg", "08:00").unwrap();
        notifier.notify(&Reminder {
            entry: Arc::new(entry),
            fired_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        });

        assert_eq!(console.prompt("Choose an option: ").await.unwrap().as_deref(), Some("1"));
        drop(console);

        let mut output = String::new();
        theirs.read_to_string(&mut output).await.unwrap();
        assert_eq!(
            output,
            "Choose an option: \n\
             Reminder: Time to take your medication - Aspirin (100mg).\n\
             Choose an option: "
        );
    }

    #[tokio::test]
    async fn test_prompt_still_reads_after_notifier_is_dropped() {
        let (notifier, rx) = ConsoleNotifier::channel();
        drop(notifier);
        let (ours, _theirs) = tokio::io::duplex(4096);
        let mut console = Console::new(Cursor::new(b"3\n".to_vec()), ours).with_reminders(rx);

        assert_eq!(console.prompt("").await.unwrap().as_deref(), Some("3"));
        assert_eq!(console.prompt("").await.unwrap(), None);
    }
}
