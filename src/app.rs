use crate::cli::Cli;
use crate::errors::Result;
use crate::graph::{extract_edges, Edge};
use crate::utils::config::load_config_at;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let bin_name = env!("CARGO_PKG_NAME");
        generate(shell, &mut cmd, bin_name, &mut io::stdout());
        return 0;
    }

    match run(&cli) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

/// Load, extract and render. Returns the edges that were rendered.
///
/// # Errors
/// Any `GraphError` from option validation, config loading or rendering.
pub fn run(cli: &Cli) -> Result<Vec<Edge>> {
    let opts = cli.run_options()?;
    let config = load_config_at(&opts.config_path)?;
    let edges = extract_edges(&config, &opts);
    opts.renderer.emit(&edges)?;
    Ok(edges)
}
