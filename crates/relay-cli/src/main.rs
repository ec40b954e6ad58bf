//! Command-line front end for the streaming relay.
//!
//! Loads the configuration document, resolves it into engine settings,
//! and either prints the result, reports per-category selection status,
//! or runs the media pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_config::ConfigDocument;
use relay_engine::{PipelineEvent, PipelineRunner};
use relay_settings::{resolve, select_enabled, ResolvedSettings, Selection, Toggled};

#[derive(Parser)]
#[command(name = "relay", about = "Configuration-driven audio/video stream relay")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved settings record as JSON.
    Show,

    /// Report the selection status of every category.
    Check,

    /// Resolve settings and run the media pipeline until it exits.
    Run,
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();

    let config = relay_config::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Command::Show => {
            let settings = resolve(&config)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => Ok(check(&config)),
        Command::Run => {
            let settings = resolve(&config)?;
            run(&settings)
        }
    }
}

/// Report each category's selection status; non-zero exit when any
/// category is ambiguous or has nothing enabled.
fn check(config: &ConfigDocument) -> ExitCode {
    let input = &config.input_stream;
    let output = &config.output_stream;

    let mut clean = true;
    clean &= report("input protocol", &select_enabled(&input.protocols));
    clean &= report("output protocol", &select_enabled(&output.protocols));
    clean &= report(
        "input video codec",
        &select_enabled(&input.codecs.video_codecs),
    );
    clean &= report(
        "input audio codec",
        &select_enabled(&input.codecs.audio_codecs),
    );
    clean &= report(
        "output video codec",
        &select_enabled(&output.codecs.video_codecs),
    );
    clean &= report(
        "output audio codec",
        &select_enabled(&output.codecs.audio_codecs),
    );

    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report<T: Toggled>(category: &str, selection: &Selection<'_, T>) -> bool {
    match selection {
        Selection::Unique { key, .. } => {
            println!("{category}: {key}");
            true
        }
        Selection::Ambiguous {
            key, enabled_count, ..
        } => {
            println!("{category}: {enabled_count} entries enabled, '{key}' wins");
            false
        }
        Selection::Absent => {
            println!("{category}: nothing enabled");
            false
        }
    }
}

/// Start the pipeline and follow it until it ends; the pipeline's exit
/// status becomes ours.
fn run(settings: &ResolvedSettings) -> anyhow::Result<ExitCode> {
    let mut runner = PipelineRunner::new(settings)?;
    let events = runner.start()?;

    for event in events.iter() {
        match event {
            PipelineEvent::Started { pid } => {
                let meta = runner.metadata();
                info!(
                    ?pid,
                    input = %meta.input_server,
                    output = %meta.output_server,
                    "Pipeline started"
                );
            }
            PipelineEvent::Exited { code } => {
                info!(?code, "Pipeline exited");
                return Ok(match code {
                    Some(0) => ExitCode::SUCCESS,
                    Some(code) => ExitCode::from(code.clamp(1, 255) as u8),
                    None => ExitCode::FAILURE,
                });
            }
            PipelineEvent::Failed { reason } => {
                error!("Pipeline failed: {reason}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    // Monitor went away without reporting an exit.
    Ok(ExitCode::FAILURE)
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "relay=info,relay_config=info,relay_settings=info,relay_engine=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
