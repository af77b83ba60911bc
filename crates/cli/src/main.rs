//! `ifacegen` binary entry point.

fn main() {
    ifacegen_cli::init_tracing();
    std::process::exit(ifacegen_cli::run_cli(std::env::args_os()));
}
