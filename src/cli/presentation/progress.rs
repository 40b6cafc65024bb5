//! Console progress lines for `donlocal-scaffold run`.

use crate::cli::presentation::shared::count_label;
use crate::scaffold::{ScaffoldEvent, ScaffoldObserver, ScaffoldReport};
use owo_colors::OwoColorize;

const START_MESSAGE: &str = "Creating Angular app structure for DonLocal...";
const SUCCESS_MESSAGE: &str = "Structure created successfully!";

pub fn format_start() -> String {
    START_MESSAGE.to_string()
}

/// One console line per progress notice. `Finished` has no line of its own;
/// the completion banner is produced from the report instead.
pub fn format_event(event: &ScaffoldEvent, color: bool) -> Option<String> {
    match event {
        ScaffoldEvent::Started(_) => Some(format_start()),
        ScaffoldEvent::DirectoryCreated(path) => Some(format!(
            "{} Created folder: {}",
            paint_added("[+]", color),
            path.display()
        )),
        ScaffoldEvent::FileCreated(path) => Some(format!(
            "    {} Created file: {}",
            paint_added("->", color),
            path.display()
        )),
        ScaffoldEvent::RootFileCreated(path) => Some(format!(
            "{} Created root file: {}",
            paint_added("[+]", color),
            path.display()
        )),
        ScaffoldEvent::Finished(_) => None,
    }
}

pub fn format_completion(report: &ScaffoldReport, color: bool) -> String {
    let headline = if color {
        SUCCESS_MESSAGE.green().bold().to_string()
    } else {
        SUCCESS_MESSAGE.to_string()
    };
    format!(
        "\n{}\n  {}, {} under {}",
        headline,
        count_label(report.directories.len(), "directory", "directories"),
        count_label(report.file_count(), "file", "files"),
        report.base_dir.display()
    )
}

fn paint_added(prefix: &str, color: bool) -> String {
    if color {
        prefix.green().to_string()
    } else {
        prefix.to_string()
    }
}

/// Prints each progress line to stdout as the run proceeds
#[derive(Debug, Clone, Copy)]
pub struct ConsoleObserver {
    color: bool,
}

impl ConsoleObserver {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ScaffoldObserver for ConsoleObserver {
    fn on_event(&mut self, event: &ScaffoldEvent) {
        if let Some(line) = format_event(event, self.color) {
            println!("{}", line);
        }
    }
}
