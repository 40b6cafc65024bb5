//! CLI presentation: console progress lines and manifest listings.

mod manifest;
mod progress;
mod shared;

pub use manifest::format_manifest;
pub use progress::{format_completion, format_event, format_start, ConsoleObserver};
