pub mod batch;
pub mod error;
pub mod lesson;
pub mod options;
pub mod settings;
pub mod tts;

pub use batch::{run, run_with, BatchReport};
pub use error::GenerateError;
pub use lesson::SentenceRecord;
pub use options::GenerationOptions;
pub use settings::Settings;
pub use tts::SpeechSynthesizer;
