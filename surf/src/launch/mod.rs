//! Handing destinations to the platform.
//!
//! The default URI handler is tried first; if it refuses, a generic
//! `xdg-open <uri>` command line is spawned instead.

mod process;

pub use process::ProcessSpawner;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Program used for the fallback command line.
pub const FALLBACK_OPENER: &str = "xdg-open";

/// Opens a URI with the default handler for its scheme.
#[cfg_attr(test, mockall::automock)]
pub trait UriLauncher: Send + Sync {
    /// Returns whether a default handler accepted the URI.
    fn launch_default(&self, uri: &str) -> bool;
}

/// Spawns a command line without waiting for it.
#[cfg_attr(test, mockall::automock)]
pub trait CommandSpawner: Send + Sync {
    /// Returns whether the command was started.
    fn try_spawn(&self, command_line: &str) -> bool;
}

impl<T: UriLauncher + ?Sized> UriLauncher for Arc<T> {
    fn launch_default(&self, uri: &str) -> bool {
        (**self).launch_default(uri)
    }
}

impl<T: CommandSpawner + ?Sized> CommandSpawner for Arc<T> {
    fn try_spawn(&self, command_line: &str) -> bool {
        (**self).try_spawn(command_line)
    }
}

/// How a destination ended up being opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchOutcome {
    /// The default handler accepted the URI.
    Default,
    /// The default handler refused and the fallback command started.
    Fallback,
    /// Neither route worked.
    Failed,
}

impl LaunchOutcome {
    /// Whether the URI was handed off somewhere.
    #[must_use]
    pub const fn is_launched(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Renders the fallback command line for `uri`.
#[must_use]
pub fn fallback_command(uri: &str) -> String {
    format!("{FALLBACK_OPENER} {uri}")
}

/// Opens `uri`, falling back to the generic opener command.
pub fn open_uri(
    launcher: &(impl UriLauncher + ?Sized),
    spawner: &(impl CommandSpawner + ?Sized),
    uri: &str,
) -> LaunchOutcome {
    if launcher.launch_default(uri) {
        return LaunchOutcome::Default;
    }

    tracing::warn!(uri, "Default handler refused URI, trying {}", FALLBACK_OPENER);
    if spawner.try_spawn(&fallback_command(uri)) {
        return LaunchOutcome::Fallback;
    }

    tracing::warn!(uri, "Could not open URI");
    LaunchOutcome::Failed
}
