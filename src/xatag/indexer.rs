use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, XatagError};

/// Notification hook for an external search indexer.
///
/// Fired once after a batch of mutations. Implementations must not block
/// on the indexer; callers downgrade any error to a single warning, so a
/// broken indexer never affects the tagging operation itself.
pub trait IndexRefresher {
    fn notify_changed(&self, files: &[PathBuf]) -> Result<()>;
}

/// Spawns a configured external command (by default `recollindex -i`) with
/// the changed paths appended, detached, output discarded.
pub struct CommandRefresher {
    command: Vec<String>,
}

impl CommandRefresher {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl IndexRefresher for CommandRefresher {
    fn notify_changed(&self, files: &[PathBuf]) -> Result<()> {
        if files.is_empty() {
            return Ok(());
        }
        let Some((program, args)) = self.command.split_first() else {
            return Err(XatagError::Usage("index command is empty".to_string()));
        };
        Command::new(program)
            .args(args)
            .args(files)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

/// Used with `--no-index`, and in tests.
pub struct NoopRefresher;

impl IndexRefresher for NoopRefresher {
    fn notify_changed(&self, _files: &[PathBuf]) -> Result<()> {
        Ok(())
    }
}
