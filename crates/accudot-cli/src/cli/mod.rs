mod commands;
mod helpers;

use clap::Parser;

pub fn run_from_env() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{error}");
                return 0;
            }
            _ => {
                eprintln!("{error}");
                return 2;
            }
        },
    };

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            2
        }
    }
}

#[derive(Parser)]
#[command(name = "accudot", about = "Accurate dot-product benchmark driver")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Benchmark every accumulator against the high-precision oracle
    Bench(commands::BenchArgs),
    /// Score every accumulator on one vector pair read from JSON
    Eval(commands::EvalArgs),
}

fn dispatch(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Bench(args) => commands::run_bench_command(args),
        CliCommand::Eval(args) => commands::run_eval_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Compute(#[from] accudot_core::DotError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
