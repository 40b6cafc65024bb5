//! CLI route: single route table and run context.

use crate::cli::parse::{Cli, Commands, ManifestFormat};
use crate::cli::presentation::{format_completion, format_manifest, ConsoleObserver};
use crate::config::{ConfigLoader, ScaffoldConfig};
use crate::error::ScaffoldError;
use crate::manifest::Manifest;
use crate::scaffold::Scaffolder;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: effective configuration and the layout.
pub struct RunContext {
    config: ScaffoldConfig,
    manifest: Manifest,
    color: bool,
}

impl RunContext {
    /// Load configuration (file when given, otherwise defaults) and apply CLI
    /// overrides. Progress output is colored only on a terminal.
    pub fn new(cli: &Cli) -> Result<Self, ScaffoldError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        if let Some(ref base_dir) = cli.base_dir {
            config.base_dir = base_dir.clone();
        }
        config.validate()?;
        let color = !cli.no_color && std::io::stdout().is_terminal();
        Ok(Self::from_parts(config, Manifest::builtin(), color))
    }

    pub fn from_parts(config: ScaffoldConfig, manifest: Manifest, color: bool) -> Self {
        Self {
            config,
            manifest,
            color,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.config.base_dir
    }

    /// Execute `command` (no command means `run`) and return the final output.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, ScaffoldError> {
        match command {
            None | Some(Commands::Run) => self.handle_run(),
            Some(Commands::Manifest { format }) => self.handle_manifest(*format),
        }
    }

    fn handle_run(&self) -> Result<String, ScaffoldError> {
        debug!(base_dir = %self.base_dir().display(), "Dispatching run");
        let report = Scaffolder::new(&self.manifest)
            .with_observer(ConsoleObserver::new(self.color))
            .run(self.base_dir())?;
        Ok(format_completion(&report, self.color))
    }

    fn handle_manifest(&self, format: ManifestFormat) -> Result<String, ScaffoldError> {
        debug!(base_dir = %self.base_dir().display(), ?format, "Dispatching manifest");
        format_manifest(&self.manifest, self.base_dir(), format)
    }

    /// Config file path that was requested, for diagnostics.
    pub fn describe_source(cli: &Cli) -> String {
        cli.config
            .as_ref()
            .map(|p: &PathBuf| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    }
}
