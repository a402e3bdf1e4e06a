use std::path::Path;

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::options::GenerationOptions;

/// Trait for text-to-speech backends that write audio straight to disk
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Voice `text` with the voice and model in `options` and write the audio
    /// to `output`, replacing any existing file. Returns once the file is
    /// fully written and synced.
    async fn synthesize_to_file(
        &self,
        text: &str,
        options: &GenerationOptions,
        output: &Path,
    ) -> Result<(), GenerateError>;
}
