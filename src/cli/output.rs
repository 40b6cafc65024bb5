//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ScaffoldError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ScaffoldError) -> String {
    match e {
        ScaffoldError::CreateDirectory { .. } | ScaffoldError::CreateFile { .. } => {
            format!("Scaffold aborted: {}", e)
        }
        _ => e.to_string(),
    }
}
