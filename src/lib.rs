pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod style;
pub mod telemetry;

use cli::output::print_error;
use config::{OutputMode, RuntimeConfig};
use error::AppError;

pub fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        output_mode: if cli_args.json {
            OutputMode::Json
        } else if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Text
        },
        color: cli_args.color,
        verbose: cli_args.verbose,
    };

    telemetry::init_tracing(config.verbose);

    let result = dispatch(&cli_args.command, &config);

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

fn dispatch(command: &cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    cli::status::handle(command, config)
}
