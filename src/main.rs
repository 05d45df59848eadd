fn main() {
    use contract_graph::cli::parse;
    let cli = parse();
    contract_graph::logging::init_logging(cli.quiet, cli.log_level);
    let code = contract_graph::app::run_cli(cli);
    if code != 0 { std::process::exit(code); }
}
