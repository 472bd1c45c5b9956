mod cli;

use cli::Args;
use rdeps::adapters::outbound::console::StderrProgressReporter;
use rdeps::adapters::outbound::filesystem::{FileSystemReader, FORMULA_INDEX_FILENAME};
use rdeps::adapters::outbound::install_state::{CellarInstallState, FixedInstallState};
use rdeps::application::dto::{OutputFormat, UsesRequest};
use rdeps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use rdeps::application::use_cases::FindDependentsUseCase;
use rdeps::config::{self, ConfigFile};
use rdeps::ports::outbound::{DependentsFormatter, InstallState, OutputPresenter, ProgressReporter};
use rdeps::reverse_deps::domain::KindFilter;
use rdeps::shared::error::{ExitCode, RdepsError};
use rdeps::shared::Result;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives
const LOG_ENV: &str = "RDEPS_LOG";

fn main() {
    init_tracing();

    let args = Args::parse_args();
    let reporter = StderrProgressReporter::with_verbosity(args.verbose);

    let exit_code = match run(args, &reporter) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();

            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("rdeps=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<RdepsError>() {
        Some(RdepsError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

fn run(args: Args, reporter: &StderrProgressReporter) -> Result<ExitCode> {
    let config = load_config(&args, reporter)?;
    let settings = Settings::merge(args, config.unwrap_or_default())?;

    let cellar_state;
    let fixed_state = FixedInstallState::new();
    let install_state: &dyn InstallState = match &settings.cellar {
        Some(cellar) => {
            cellar_state = CellarInstallState::new(cellar)?;
            &cellar_state
        }
        None => &fixed_state,
    };

    let use_case = FindDependentsUseCase::new(FileSystemReader::new(), install_state, reporter);
    let response = use_case.execute(settings.request)?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&response)?;

    let presenter_type = PresenterType::from_output(settings.output);
    let written_to = match &presenter_type {
        PresenterType::File(path) => Some(path.clone()),
        PresenterType::Stdout => None,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;
    if let Some(path) = written_to {
        reporter.report(&format!("✅ Output complete: {}", path.display()));
    }

    if response.has_unresolved_targets() {
        Ok(ExitCode::UnresolvedTargets)
    } else {
        Ok(ExitCode::Success)
    }
}

fn load_config(args: &Args, reporter: &dyn ProgressReporter) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path, reporter).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd, reporter)
        }
    }
}

/// Command-line arguments merged over the config file
#[derive(Debug)]
struct Settings {
    request: UsesRequest,
    cellar: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
}

impl Settings {
    /// Values given on the command line win; boolean flags are OR-ed with
    /// the config file since a flag cannot be switched off explicitly.
    fn merge(args: Args, config: ConfigFile) -> Result<Self> {
        let flag = |cli: bool, file: Option<bool>| cli || file.unwrap_or(false);

        let kinds = KindFilter::from_flags(
            flag(args.include_build, config.include_build),
            flag(args.include_test, config.include_test),
            flag(args.include_optional, config.include_optional),
            flag(args.skip_recommended, config.skip_recommended),
        );

        let formulae_path = args
            .formulae_path
            .or(config.formulae.clone())
            .unwrap_or_else(|| PathBuf::from(FORMULA_INDEX_FILENAME));

        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let request = UsesRequest::builder()
            .targets(args.formulae)
            .formulae_path(formulae_path)
            .kinds(kinds)
            .recursive(flag(args.recursive, config.recursive))
            .installed_only(flag(args.installed, config.installed))
            .missing_only(flag(args.missing, config.missing))
            .match_missing(flag(args.match_missing, config.match_missing))
            .build()?;

        Ok(Self {
            request,
            cellar: args.cellar.or(config.cellar),
            format,
            output: args.output,
        })
    }
}
