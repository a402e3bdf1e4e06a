use std::process::ExitCode;

use anyhow::Result;
use lesson_audio_core::settings::load_settings;
use lesson_audio_core::GenerationOptions;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// Usage:
//   OPENAI_API_KEY=... lesson-audio [--voice <voice>] [--model <model>]
//                                   [--lesson <prefix>] [--id <id>]
//
// voices: alloy, echo, fable, onyx, nova, shimmer
// models: gpt-4o-mini-tts, tts-1, tts-1-hd

fn main() -> ExitCode {
    setup_tracing();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(async_main()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn async_main() -> Result<()> {
    let settings = load_settings()?;
    let options = GenerationOptions::parse(std::env::args().skip(1), &settings);

    info!(
        "CLI startup: voice={}, model={}, lesson={:?}, id={:?}",
        options.voice, options.model, options.lesson, options.id
    );

    let report = lesson_audio_core::run(&settings, &options).await?;
    info!(
        "Wrote {} audio files ({} sentences in data file)",
        report.written.len(),
        report.found
    );
    Ok(())
}

fn setup_tracing() {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
