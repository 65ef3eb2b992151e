//! Recording launch collaborators.

use parking_lot::Mutex;

use crate::launch::{CommandSpawner, UriLauncher};

/// A launcher that records every URI and answers with a fixed result.
#[derive(Debug)]
pub struct RecordingLauncher {
    accept: Mutex<bool>,
    launched: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    /// Creates a launcher that accepts (or refuses) every URI.
    #[must_use]
    pub fn new(accept: bool) -> Self {
        Self {
            accept: Mutex::new(accept),
            launched: Mutex::new(Vec::new()),
        }
    }

    /// Changes whether URIs are accepted.
    pub fn set_accept(&self, accept: bool) {
        *self.accept.lock() = accept;
    }

    /// Returns the URIs seen so far.
    #[must_use]
    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.launched.lock().clear();
    }
}

impl UriLauncher for RecordingLauncher {
    fn launch_default(&self, uri: &str) -> bool {
        self.launched.lock().push(uri.to_string());
        *self.accept.lock()
    }
}

/// A spawner that records every command line and answers with a fixed result.
#[derive(Debug)]
pub struct RecordingSpawner {
    succeed: bool,
    spawned: Mutex<Vec<String>>,
}

impl RecordingSpawner {
    /// Creates a spawner that reports success (or failure) for every command.
    #[must_use]
    pub fn new(succeed: bool) -> Self {
        Self {
            succeed,
            spawned: Mutex::new(Vec::new()),
        }
    }

    /// Returns the command lines seen so far.
    #[must_use]
    pub fn spawned(&self) -> Vec<String> {
        self.spawned.lock().clone()
    }
}

impl CommandSpawner for RecordingSpawner {
    fn try_spawn(&self, command_line: &str) -> bool {
        self.spawned.lock().push(command_line.to_string());
        self.succeed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_launcher() {
        let launcher = RecordingLauncher::new(false);
        assert!(!launcher.launch_default("http://a.example"));
        launcher.set_accept(true);
        assert!(launcher.launch_default("http://b.example"));
        assert_eq!(launcher.launched(), vec!["http://a.example", "http://b.example"]);

        launcher.reset();
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn test_recording_spawner() {
        let spawner = RecordingSpawner::new(true);
        assert!(spawner.try_spawn("xdg-open http://a.example"));
        assert_eq!(spawner.spawned(), vec!["xdg-open http://a.example"]);
    }
}
