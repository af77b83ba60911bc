#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Command line driver for `ifacegen`.
//!
//! Loads resolved type descriptors from disk, generates one interface per
//! class and prints or writes the results.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "ifacegen",
    version,
    about = "Generate C# interfaces from resolved class descriptors"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate interfaces from descriptor files
    Generate(commands::generate::GenerateArgs),
    /// Print the effective configuration
    Config(commands::config::ConfigArgs),
}

/// Parse `args` (including the program name) and run the selected command.
///
/// Returns the process exit code.
pub fn run_cli<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => commands::generate::run(args),
            Some(Commands::Config(args)) => commands::config::run(args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Install the stderr log subscriber.
///
/// IFACEGEN_LOG controls the level: "trace", "debug", "info", "warn", "error"
/// or a full filter spec like "ifacegen_core=debug".
pub fn init_tracing() {
    let filter = match std::env::var("IFACEGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("ifacegen_core={level},ifacegen_cli={level}")
        }
        Ok(spec) => spec,
        Err(_) => "ifacegen_core=warn,ifacegen_cli=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
