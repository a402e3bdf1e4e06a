use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::GenerateError;
use crate::lesson::{load_records, select_records};
use crate::options::GenerationOptions;
use crate::settings::Settings;
use crate::tts::{OpenAiSpeech, SpeechSynthesizer};

/// Outcome of a fully successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Records found in the data file, before filtering
    pub found: usize,
    /// Audio files written, in processing order
    pub written: Vec<PathBuf>,
}

/// Run a whole batch against the configured speech service.
///
/// The credential is checked before anything touches the filesystem or
/// network.
pub async fn run(
    settings: &Settings,
    options: &GenerationOptions,
) -> Result<BatchReport, GenerateError> {
    let api_key = settings.api_key()?;
    let synthesizer = OpenAiSpeech::new(settings.speech.clone(), api_key)?;
    run_with(settings, options, &synthesizer).await
}

/// Run a batch with the given synthesizer: ensure the output directory,
/// load and filter records, then voice them one at a time. The first
/// failure stops the batch; later records are not attempted.
pub async fn run_with(
    settings: &Settings,
    options: &GenerationOptions,
    synthesizer: &dyn SpeechSynthesizer,
) -> Result<BatchReport, GenerateError> {
    ensure_dir(&settings.paths.audio_dir)?;

    let data_file = &settings.paths.data_file;
    let records = load_records(data_file)?;
    if records.is_empty() {
        return Err(GenerateError::NoRecords {
            path: data_file.clone(),
        });
    }
    let found = records.len();
    info!("Found {} example sentences", found);

    let selected = select_records(records, options)?;
    info!(
        "Processing {} example sentences with {} (voice={}, model={})",
        selected.len(),
        synthesizer.name(),
        options.voice,
        options.model
    );

    let mut written = Vec::with_capacity(selected.len());
    for record in &selected {
        let output = settings.audio_path_for(&record.id);
        info!("Generating audio for \"{}\"", record.id);
        info!("Text: {}", record.text);

        synthesizer
            .synthesize_to_file(&record.text, options, &output)
            .await?;

        info!("Saved audio file: {}", output.display());
        written.push(output);
    }

    info!("Audio generation complete");
    Ok(BatchReport { found, written })
}

fn ensure_dir(dir: &Path) -> Result<(), GenerateError> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!("Created directory: {}", dir.display());
    Ok(())
}
