use anyhow::{Context, Result};
use patterns::cli::commands::{ListCommand, RunCommand, ValidateCommand};
use patterns::cli::output::*;
use patterns::cli::{Cli, Command};
use patterns::core::DemoOptions;
use patterns::demo::{write_reports, Demonstration};
use patterns::patterns::{logger::TracingLogger, services::ServiceProvider};
use std::io;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for the demonstration itself
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Run(cmd) => run_demonstration(cmd, &cli).await?,
        Command::List(cmd) => list_sections(cmd)?,
        Command::Validate(cmd) => validate_options(cmd)?,
    }

    Ok(())
}

async fn run_demonstration(cmd: &RunCommand, cli: &Cli) -> Result<()> {
    let options = DemoOptions::load(cli.config.as_deref())
        .context("Failed to load options")?;

    let demo = if cli.verbose {
        let services = ServiceProvider::with_logger(&options, Arc::new(TracingLogger));
        Demonstration::with_services(services)
            .with_pipeline_handler(|event| eprintln!("{}", format_pipeline_event(event)))
    } else {
        Demonstration::new(&options)
    };

    let reports = match demo.run(&cmd.only).await {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{} Demonstration {}", CROSS, style("failed").red());
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&reports_json(&reports))?);
    } else {
        let mut stdout = io::stdout().lock();
        write_reports(&mut stdout, &reports).context("Failed to write demonstration output")?;
    }

    eprintln!("\n{}", format_run_summary(&reports));
    Ok(())
}

fn list_sections(cmd: &ListCommand) -> Result<()> {
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&section_list_json())?);
        return Ok(());
    }

    println!("{} Demonstration sections:", INFO);
    for line in format_section_list() {
        println!("  {}", line);
    }
    Ok(())
}

fn validate_options(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating options...", INFO);

    match DemoOptions::from_file(&cmd.file) {
        Ok(options) => {
            println!("{} Options are valid!", CHECK);
            for line in format_options_summary(&options) {
                println!("{}", line);
            }

            if cmd.json {
                let json = serde_json::to_string_pretty(&options)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}
