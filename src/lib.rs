//! contract-graph — import-linter contracts as a dependency graph
//!
//! Reads the `[tool.importlinter]` section of a `pyproject.toml`, turns each
//! contract's `ignore_imports` rule (`"a.b -> c.d"`) into an edge and renders
//! the deduplicated edge list either as plain text or as a Mermaid diagram.
//!
//! # Quickstart (Library)
//! ```no_run
//! use contract_graph::graph::{extract_edges, RunOptions};
//! use contract_graph::utils::config::load_config_at;
//! use contract_graph::visualization::render_mermaid;
//!
//! let config = load_config_at(std::path::Path::new("pyproject.toml")).expect("load config");
//! let opts = RunOptions { part: Some(0), ..RunOptions::default() };
//! let edges = extract_edges(&config, &opts);
//! print!("{}", render_mermaid(&edges));
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! contract-graph --config pyproject.toml --part 1
//! contract-graph --renderer mermaid --only-source web
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod utils;
pub mod visualization;
