use crate::utils::config::{default_config_path, Configuration};
use crate::visualization::Renderer;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Delimiter between the two sides of an `ignore_imports` rule.
pub const RULE_DELIMITER: &str = "->";

/// A directed dependency between two (possibly truncated) module paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub destination: String,
}

impl Edge {
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self { source: source.into(), destination: destination.into() }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.source, self.destination)
    }
}

/// Options for a single run, built once from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Zero-based dotted segment to keep; `None` keeps the full path.
    pub part: Option<usize>,
    pub config_path: PathBuf,
    pub only_source: Option<String>,
    pub destination_filter: Option<String>,
    pub renderer: Renderer,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            part: None,
            config_path: default_config_path(),
            only_source: None,
            destination_filter: None,
            renderer: Renderer::default(),
        }
    }
}

impl RunOptions {
    /// Keep the `part`-th dotted segment of `path`, or the whole path when
    /// no part is selected or the path has too few segments.
    #[must_use]
    pub fn select_segment<'a>(&self, path: &'a str) -> &'a str {
        match self.part {
            Some(idx) => path.split('.').nth(idx).unwrap_or(path),
            None => path,
        }
    }

    fn accepts(&self, edge: &Edge) -> bool {
        let source_ok = self.only_source.as_deref().map_or(true, |s| edge.source.contains(s));
        let dest_ok =
            self.destination_filter.as_deref().map_or(true, |d| edge.destination.contains(d));
        source_ok && dest_ok
    }
}

/// Split a rule of the form `"a.b -> c.d"` into trimmed sides.
///
/// Returns `None` unless the rule contains exactly one delimiter.
#[must_use]
pub fn parse_rule(rule: &str) -> Option<(&str, &str)> {
    let mut parts = rule.split(RULE_DELIMITER);
    let source = parts.next()?;
    let destination = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((source.trim(), destination.trim()))
}

/// Iterate every `ignore_imports` rule in contract order.
pub fn rules(config: &Configuration) -> impl Iterator<Item = &str> {
    config.contracts().iter().flat_map(|c| c.ignore_imports.iter().map(String::as_str))
}

/// Extract the filtered, deduplicated edge list.
///
/// Malformed rules are skipped. Edge order follows rule order; the first
/// occurrence of a rendered edge wins.
#[must_use]
pub fn extract_edges(config: &Configuration, opts: &RunOptions) -> Vec<Edge> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut edges = Vec::new();
    let mut skipped = 0usize;

    for rule in rules(config) {
        let Some((source, destination)) = parse_rule(rule) else {
            tracing::debug!(rule, "skipping malformed ignore rule");
            skipped += 1;
            continue;
        };
        let edge = Edge::new(opts.select_segment(source), opts.select_segment(destination));
        if !opts.accepts(&edge) {
            continue;
        }
        if seen.insert(edge.to_string()) {
            edges.push(edge);
        }
    }

    tracing::info!(edges = edges.len(), skipped, "extracted edges");
    edges
}
