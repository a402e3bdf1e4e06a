use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::provider::SpeechSynthesizer;
use crate::error::GenerateError;
use crate::options::GenerationOptions;

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Write the text bytes as the "audio" for every call
    #[default]
    Success,
    /// Fail with an API error when asked to voice this text, succeed otherwise
    ApiErrorOnText {
        text: String,
        status: u16,
        body: String,
    },
}

/// One recorded call to the mock synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub text: String,
    pub voice: String,
    pub model: String,
    pub output: PathBuf,
}

/// In-process synthesizer that records calls instead of hitting the network
#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn synthesize_to_file(
        &self,
        text: &str,
        options: &GenerationOptions,
        output: &Path,
    ) -> Result<(), GenerateError> {
        self.calls.lock().unwrap().push(MockCall {
            text: text.to_string(),
            voice: options.voice.clone(),
            model: options.model.clone(),
            output: output.to_path_buf(),
        });

        if let MockBehavior::ApiErrorOnText {
            text: failing,
            status,
            body,
        } = &self.behavior
        {
            if failing == text {
                return Err(GenerateError::Api {
                    status: *status,
                    body: body.clone(),
                });
            }
        }

        tokio::fs::write(output, text.as_bytes())
            .await
            .map_err(|source| GenerateError::Write {
                path: output.to_path_buf(),
                source,
            })
    }
}
