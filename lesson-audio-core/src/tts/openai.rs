//! OpenAI text-to-speech implementation

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::provider::SpeechSynthesizer;
use super::types::SpeechRequest;
use crate::error::GenerateError;
use crate::options::GenerationOptions;
use crate::settings::SpeechSettings;

pub struct OpenAiSpeech {
    client: Client,
    api_key: String,
    settings: SpeechSettings,
}

impl OpenAiSpeech {
    pub fn new(settings: SpeechSettings, api_key: String) -> Result<Self, GenerateError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/audio/speech",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    pub fn build_request<'a>(
        &'a self,
        text: &'a str,
        options: &'a GenerationOptions,
    ) -> SpeechRequest<'a> {
        let instructions = self.settings.instructions.as_str();
        SpeechRequest {
            model: &options.model,
            input: text,
            voice: &options.voice,
            response_format: &self.settings.response_format,
            speed: self.settings.speed,
            voice_instructions: (!instructions.is_empty()).then_some(instructions),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeech {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    async fn synthesize_to_file(
        &self,
        text: &str,
        options: &GenerationOptions,
        output: &Path,
    ) -> Result<(), GenerateError> {
        let url = self.endpoint();
        let request_body = self.build_request(text, options);
        debug!(%url, model = %options.model, voice = %options.voice, "Sending speech request");

        let mut response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let write_err = |source| GenerateError::Write {
            path: output.to_path_buf(),
            source,
        };

        let mut file = File::create(output).await.map_err(write_err)?;
        let mut written = 0usize;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(write_err)?;
            written += chunk.len();
        }
        file.flush().await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;

        debug!(bytes = written, path = ?output, "Audio written");
        Ok(())
    }
}
