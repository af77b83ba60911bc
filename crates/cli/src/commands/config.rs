//! `ifacegen config`: print the effective configuration.

use clap::Args;

use super::ConfigOptions;

/// Arguments of `ifacegen config`.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Configuration file and overrides.
    #[command(flatten)]
    pub config: ConfigOptions,
}

/// Print the resolved configuration as TOML, returning the exit code.
pub fn run(args: ConfigArgs) -> i32 {
    let config = match args.config.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    match config.to_toml() {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(err) => {
            eprintln!("Failed to serialize configuration: {err}");
            1
        }
    }
}
