mod common;

use clap::Parser;
use common::{pyproject, write_file};
use contract_graph::app::{run, run_cli};
use contract_graph::cli::Cli;
use contract_graph::graph::Edge;
use tempfile::tempdir;

#[test]
fn app_run_returns_rendered_edges() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("pyproject.toml");
    write_file(
        &cfg,
        &pyproject(&[&["web.api.handlers -> db.models"], &["web.api.views -> db.models"]]),
    );

    let cli =
        Cli::parse_from(["contract-graph", "--config", cfg.to_str().unwrap(), "--part", "1"]);
    let edges = run(&cli).unwrap();
    assert_eq!(edges, vec![Edge::new("api", "models")]);
}

#[test]
fn app_exit_codes() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("pyproject.toml");

    let cli = Cli::parse_from(["contract-graph", "--config", cfg.to_str().unwrap()]);
    assert_eq!(run_cli(cli), 1);

    write_file(&cfg, &pyproject(&[&["a -> b"]]));
    let cli = Cli::parse_from(["contract-graph", "--config", cfg.to_str().unwrap()]);
    assert_eq!(run_cli(cli), 0);

    let cli = Cli::parse_from([
        "contract-graph",
        "--config",
        cfg.to_str().unwrap(),
        "--renderer",
        "dot",
    ]);
    assert_eq!(run_cli(cli), 4);
}

#[test]
fn run_options_from_defaults() {
    let cli = Cli::parse_from(["contract-graph"]);
    assert_eq!(cli.config, "pyproject.toml");
    let opts = cli.run_options().unwrap();
    assert_eq!(opts.part, None);
    assert_eq!(opts.config_path, std::path::PathBuf::from("pyproject.toml"));
    assert_eq!(opts.only_source, None);
    assert_eq!(opts.destination_filter, None);
    assert_eq!(opts.renderer, contract_graph::visualization::Renderer::Plain);
}

#[test]
fn empty_filter_values_disable_filtering() {
    let cli = Cli::parse_from(["contract-graph", "--only-source", "", "--destination-type", ""]);
    let opts = cli.run_options().unwrap();
    assert_eq!(opts.only_source, None);
    assert_eq!(opts.destination_filter, None);

    let cli = Cli::parse_from(["contract-graph", "--only-source", "web", "--part", "-3"]);
    let opts = cli.run_options().unwrap();
    assert_eq!(opts.only_source.as_deref(), Some("web"));
    assert_eq!(opts.part, None);
}
