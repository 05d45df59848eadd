use crate::errors::{GraphError, Result};
use crate::graph::Edge;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File the diagram renderer writes to, relative to the working directory.
pub const DIAGRAM_FILE: &str = "diagram.md";

const GRAPH_HEADER: &str = "graph TD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Renderer {
    /// Edge listing on stdout.
    #[default]
    Plain,
    /// Fenced Mermaid block in `diagram.md`.
    Diagram,
}

impl Renderer {
    /// CLI names accepted by [`FromStr`].
    pub const NAMES: [&'static str; 2] = ["stdout", "mermaid"];

    /// Render `edges` and write them to this renderer's destination.
    ///
    /// # Errors
    /// Returns `GraphError::Output` if stdout or the diagram file cannot be written.
    pub fn emit(self, edges: &[Edge]) -> Result<()> {
        match self {
            Self::Plain => {
                let to_err =
                    |source| GraphError::Output { path: PathBuf::from("<stdout>"), source };
                let mut out = io::stdout().lock();
                out.write_all(render_plain(edges).as_bytes()).map_err(to_err)?;
                out.flush().map_err(to_err)
            }
            Self::Diagram => write_diagram(edges, Path::new(DIAGRAM_FILE)),
        }
    }
}

impl FromStr for Renderer {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdout" | "plain" => Ok(Self::Plain),
            "mermaid" | "diagram" => Ok(Self::Diagram),
            other => Err(GraphError::Configuration(format!(
                "unknown renderer '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

fn push_graph(s: &mut String, edges: &[Edge]) {
    s.push_str(GRAPH_HEADER);
    s.push('\n');
    for edge in edges {
        let _ = writeln!(s, "{edge}");
    }
}

/// Plain listing: the graph header followed by one edge per line.
#[must_use]
pub fn render_plain(edges: &[Edge]) -> String {
    let mut s = String::new();
    push_graph(&mut s, edges);
    s
}

/// The plain listing wrapped in a ```` ```mermaid ```` fence.
#[must_use]
pub fn render_mermaid(edges: &[Edge]) -> String {
    let mut s = String::from("```mermaid\n");
    push_graph(&mut s, edges);
    s.push_str("```\n");
    s
}

/// Write the Mermaid block to `path`, replacing any existing file.
///
/// # Errors
/// Returns `GraphError::Output` if the file cannot be created or written.
pub fn write_diagram(edges: &[Edge], path: &Path) -> Result<()> {
    let to_err = |source| GraphError::Output { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(to_err)?;
    let mut w = BufWriter::new(file);
    w.write_all(render_mermaid(edges).as_bytes()).map_err(to_err)?;
    w.flush().map_err(to_err)?;
    tracing::info!(path = %path.display(), edges = edges.len(), "wrote mermaid diagram");
    Ok(())
}
