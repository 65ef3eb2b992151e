//! A [`CommandSpawner`] backed by `std::process`.

use std::process::{Command, Stdio};

use super::CommandSpawner;

/// Spawns command lines as detached child processes.
///
/// The command line is split on whitespace; no shell is involved, so quoting
/// and globbing are not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl ProcessSpawner {
    /// Creates a new spawner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandSpawner for ProcessSpawner {
    fn try_spawn(&self, command_line: &str) -> bool {
        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            tracing::warn!("Refusing to spawn an empty command line");
            return false;
        };

        match Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                tracing::debug!(program, pid = child.id(), "Spawned command");
                // Reap the child so it does not linger as a zombie.
                std::thread::spawn(move || match child.wait() {
                    Ok(status) => tracing::debug!(%status, "Spawned command exited"),
                    Err(e) => tracing::debug!(error = %e, "Failed to wait for spawned command"),
                });
                true
            }
            Err(e) => {
                tracing::warn!(program, error = %e, "Failed to spawn command");
                false
            }
        }
    }
}
