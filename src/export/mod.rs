//! Network export: bounded neighborhoods rendered to images or DOT files
//!
//! A subgraph is first handed to a [`GraphRenderer`]. If the renderer fails
//! for any reason, the subgraph is written as `<base_path>.dot` together
//! with a command for rendering it by hand.

mod dot;
mod neighborhood;
mod renderer;

pub use dot::to_dot;
pub use neighborhood::{NeighborhoodQuery, Subgraph};
pub use renderer::{GraphRenderer, GraphvizRenderer, MockRenderer, RenderError};

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExportOutcome {
    /// The renderer produced an image
    Rendered { image: PathBuf },
    /// The renderer failed; a DOT file was written instead
    Fallback {
        dot: PathBuf,
        /// Command that renders the DOT file manually
        instruction: String,
        /// Why the renderer was bypassed
        reason: String,
    },
}

impl ExportOutcome {
    /// The file that was written
    pub fn path(&self) -> &Path {
        match self {
            Self::Rendered { image } => image,
            Self::Fallback { dot, .. } => dot,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// `<base_path>.dot`, keeping any dots already in the file name
pub fn dot_path(base_path: &Path) -> PathBuf {
    let mut name = base_path.as_os_str().to_os_string();
    name.push(".dot");
    PathBuf::from(name)
}

/// Render `subgraph`, falling back to a DOT file when the renderer fails.
///
/// Only a failure to write the fallback file is returned as an error.
pub fn export_subgraph(
    subgraph: &Subgraph,
    renderer: &dyn GraphRenderer,
    base_path: &Path,
) -> std::io::Result<ExportOutcome> {
    if let Some(parent) = base_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match renderer.render(subgraph, base_path) {
        Ok(image) => {
            tracing::info!(
                focal = %subgraph.focal,
                image = %image.display(),
                "rendered network with {}",
                renderer.name()
            );
            Ok(ExportOutcome::Rendered { image })
        }
        Err(e) => {
            tracing::warn!(
                focal = %subgraph.focal,
                error = %e,
                "renderer '{}' failed, writing DOT fallback",
                renderer.name()
            );
            let dot = dot_path(base_path);
            std::fs::write(&dot, to_dot(subgraph))?;
            let instruction = renderer.manual_instruction(&dot);
            Ok(ExportOutcome::Fallback {
                dot,
                instruction,
                reason: e.to_string(),
            })
        }
    }
}
