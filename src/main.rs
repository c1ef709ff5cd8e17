mod adapters;
mod application;
mod ci_graph;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use adapters::outbound::filesystem::FileSystemInventoryReader;
use application::dto::{GraphRequest, OutputFormat};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::read_models::QueryReadModelBuilder;
use application::use_cases::QueryGraphUseCase;
use cli::{merge_config, Args, Settings};
use config::ConfigFile;
use ports::outbound::ProgressReporter;
use shared::error::ExitCode;
use shared::Result;
use std::process;

fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = merge_config(args, config)?;

    if settings.quiet {
        execute(settings, QuietProgressReporter)
    } else {
        execute(settings, StderrProgressReporter::new())
    }
}

/// Explicit `--config` must exist; otherwise look for one in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => {
            let loaded = config::load_config_from_path(path)?;
            if !args.quiet {
                eprintln!("⚙️  Loaded config from: {}", path.display());
            }
            Ok(Some(loaded))
        }
        None => {
            let cwd = std::env::current_dir()?;
            let discovered = config::discover_config(&cwd)?;
            if discovered.is_some() && !args.quiet {
                eprintln!(
                    "⚙️  Auto-discovered config file: {}",
                    cwd.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(discovered)
        }
    }
}

fn execute<PR: ProgressReporter>(settings: Settings, reporter: PR) -> Result<ExitCode> {
    let format: OutputFormat = settings.format;
    let presenter_type = PresenterType::from_output(settings.output);

    let use_case = QueryGraphUseCase::new(FileSystemInventoryReader::new(), &reporter);
    let request = GraphRequest::new(settings.input, settings.query, settings.warn_integrity);
    let response = use_case.execute(request)?;

    reporter.report(FormatterFactory::progress_message(format));
    let model = QueryReadModelBuilder::build(&response);
    let output = FormatterFactory::create(format).format(&model)?;

    PresenterFactory::create(presenter_type).present(&output)?;

    if response.outcome.is_empty_result() {
        Ok(ExitCode::EmptyResult)
    } else {
        Ok(ExitCode::Success)
    }
}
