//! # Surf
//!
//! Decides whether text typed into a desktop search surface should be opened
//! as a URL or sent to a web search engine.
//!
//! Surf provides:
//!
//! - **Trigger detection**: only queries starting with a configured trigger
//!   are handled
//! - **URL classification**: a permissive syntactic check for host names and
//!   dotted quads
//! - **Destination building**: `http://`-prefixed URLs or encoded search
//!   requests appended to a configurable template
//! - **Host integration**: a search provider with register/unregister
//!   lifecycle and a two-tier URI launcher
//!
//! ## Quick Start
//!
//! ```rust
//! use surf::prelude::*;
//!
//! let config = SurfConfig::new()
//!     .with_triggers("?")
//!     .with_search_url("https://duckduckgo.com/?q=");
//!
//! let terms = ["?", "hello", "world"];
//! assert!(accepts(&terms, &config.triggers));
//! assert_eq!(
//!     build(&terms, &config).uri(),
//!     "https://duckduckgo.com/?q=hello%20world"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod launch;
pub mod observability;
pub mod provider;
pub mod resolver;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{
        MemorySettingsStore, SettingsStore, SurfConfig, TriggerSet,
    };
    pub use crate::errors::{RegistrationError, SettingsError, SurfError, SurfResult};
    pub use crate::launch::{
        open_uri, CommandSpawner, LaunchOutcome, ProcessSpawner, UriLauncher,
    };
    pub use crate::provider::{
        describe, limit, HostSearchSurface, ProviderRegistry, ResultDescriptor,
        SearchProvider, SurfExtension, SurfSearchProvider,
    };
    pub use crate::resolver::{
        accepts, build, is_valid_url, Destination, QueryResolver,
    };
}
