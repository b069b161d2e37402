use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use dmenu_hist_core::error::Result;
use dmenu_hist_core::execution::{self, Outcome};
use env_logger::Env;
use log::{debug, info};

use dmenu_hist_cli::cli_args::Args;
use dmenu_hist_cli::launcher::{self, RunOptions};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn execute() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.to_config()?;
    debug!("History path: `{}`", config.history_path.display());
    debug!("Cache path: `{}`", config.cache_path.display());

    if args.edit {
        return execution::edit_history(&config);
    }

    let options = RunOptions {
        dry_run: args.noop,
        verbose: args.verbose,
    };

    match launcher::run(&config, options, &mut stdout().lock())? {
        Outcome::Launched(program) => info!("Started {}", program.display()),
        outcome => debug!("Finished with {outcome:?}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
