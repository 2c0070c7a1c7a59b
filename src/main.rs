mod cli;

use bom_master::adapters::outbound::console::StderrProgressReporter;
use bom_master::application::dto::BrowseRequest;
use bom_master::application::factories::{FormatterFactory, PresenterFactory, RecordSourceFactory};
use bom_master::application::read_models::AssemblyReadModelBuilder;
use bom_master::application::use_cases::AssemblyBrowser;
use bom_master::config::{self, ConfigFile};
use bom_master::shared::error::ExitCode;
use bom_master::shared::Result;
use cli::{Args, Settings};
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args, config)?;

    // Create adapters (Dependency Injection)
    let record_source = RecordSourceFactory::create(&settings.source)?;
    let progress_reporter = StderrProgressReporter::new();

    let mut browser = AssemblyBrowser::new(record_source, progress_reporter, settings.policy);
    let request = BrowseRequest::new(settings.selected_id, settings.separator.clone());
    let response = browser.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let model = AssemblyReadModelBuilder::build(
        &response.snapshot,
        response.selection.as_ref(),
        response.unresolved_selection,
        &settings.separator,
    );
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(settings.output.clone().into());
    presenter.present(&formatted_output)?;

    if response.selection_missed() {
        Ok(ExitCode::NodeNotFound)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Loads the config given with `--config`, or discovers one in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            let discovered = config::discover_config(&cwd)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    cwd.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(discovered)
        }
    }
}
