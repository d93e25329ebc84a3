//! Image rendering backends for exported subgraphs
//!
//! Two implementations:
//! - `GraphvizRenderer`: pipes DOT source into the Graphviz `dot` program
//! - `MockRenderer`: records calls and succeeds or fails on demand (testing)

use super::dot::to_dot;
use super::neighborhood::Subgraph;
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Errors from a rendering backend.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("renderer not available: {0}")]
    Unavailable(String),
    #[error("rendering failed: {0}")]
    Failed(String),
    #[error("renderer I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend that turns a subgraph into an image file.
pub trait GraphRenderer {
    /// Short backend name for logs
    fn name(&self) -> &str;

    /// Render `subgraph` to an image derived from `base_path`.
    ///
    /// Returns the path of the written image.
    fn render(&self, subgraph: &Subgraph, base_path: &Path) -> Result<PathBuf, RenderError>;

    /// Command a user can run to render a DOT file by hand
    fn manual_instruction(&self, dot_path: &Path) -> String {
        format!(
            "dot -Tpng {} -o {}",
            dot_path.display(),
            dot_path.with_extension("png").display()
        )
    }
}

/// Renderer that shells out to Graphviz
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
    format: String,
}

impl GraphvizRenderer {
    /// `dot` producing PNG
    pub fn new() -> Self {
        Self {
            program: "dot".to_string(),
            format: "png".to_string(),
        }
    }

    /// Use a different executable (e.g. `neato` or an absolute path)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Output format passed as `-T<format>`
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn image_path(&self, base_path: &Path) -> PathBuf {
        image_path(base_path, &self.format)
    }
}

/// `<base_path>.<format>`, keeping any dots already in the file name
fn image_path(base_path: &Path, format: &str) -> PathBuf {
    let mut name = base_path.as_os_str().to_os_string();
    name.push(".");
    name.push(format);
    PathBuf::from(name)
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    fn render(&self, subgraph: &Subgraph, base_path: &Path) -> Result<PathBuf, RenderError> {
        let output = self.image_path(base_path);

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(&output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    RenderError::Unavailable(format!("'{}' not found on PATH", self.program))
                }
                _ => RenderError::Io(e),
            })?;

        // Dropping stdin closes the pipe before the wait
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(to_dot(subgraph).as_bytes()),
            None => Ok(()),
        };

        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(RenderError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }

        written?;

        Ok(output)
    }

    fn manual_instruction(&self, dot_path: &Path) -> String {
        format!(
            "{} -T{} {} -o {}",
            self.program,
            self.format,
            dot_path.display(),
            dot_path.with_extension(&self.format).display()
        )
    }
}

/// Mock renderer for testing. Never touches the filesystem.
#[derive(Debug, Default)]
pub struct MockRenderer {
    available: bool,
    calls: RefCell<Vec<Subgraph>>,
}

impl MockRenderer {
    /// A renderer that reports success
    pub fn available() -> Self {
        Self {
            available: true,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A renderer that always fails with `Unavailable`
    pub fn unavailable() -> Self {
        Self {
            available: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Subgraphs passed to `render`, in call order
    pub fn calls(&self) -> Vec<Subgraph> {
        self.calls.borrow().clone()
    }
}

impl GraphRenderer for MockRenderer {
    fn name(&self) -> &str {
        "mock"
    }

    fn render(&self, subgraph: &Subgraph, base_path: &Path) -> Result<PathBuf, RenderError> {
        self.calls.borrow_mut().push(subgraph.clone());
        if !self.available {
            return Err(RenderError::Unavailable(
                "mock renderer configured as unavailable".to_string(),
            ));
        }
        Ok(image_path(base_path, "png"))
    }
}
