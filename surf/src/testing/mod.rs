//! Testing utilities for code embedding the provider.
//!
//! This module provides recording doubles for the launch collaborators.

mod mocks;

pub use mocks::{RecordingLauncher, RecordingSpawner};
