//! DonLocal scaffold
//!
//! Creates the empty directory and file skeleton of the DonLocal Angular
//! front end: component folders, service stubs, model stubs, and the root
//! application files. Every file is created zero bytes long; existing files
//! are truncated.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod scaffold;

pub use error::ScaffoldError;
pub use manifest::{Manifest, ManifestEntry};
pub use scaffold::{run, ScaffoldEvent, ScaffoldObserver, ScaffoldReport, Scaffolder};
