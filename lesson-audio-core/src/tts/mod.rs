pub mod mock;
pub mod openai;
pub mod provider;
pub mod types;

pub use openai::OpenAiSpeech;
pub use provider::SpeechSynthesizer;
