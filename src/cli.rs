//! CLI domain: parse, route, output, and presentation only.
//! The scaffold itself lives in `crate::scaffold`; this layer wires config,
//! console progress, and manifest listing around it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ManifestFormat};
pub use presentation::{
    format_completion, format_event, format_manifest, format_start, ConsoleObserver,
};
pub use route::RunContext;
