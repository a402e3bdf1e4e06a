use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_INSTRUCTIONS: &str = r#"
      Identity:
      American speaker in their early 30s, calm and confident, working in a collaborative business setting—like tech or creative teams.

      Affect:
      Friendly, thoughtful, and composed. Feels like someone speaking clearly in a casual meeting or team chat.

      Tone:
      Professional but relaxed. Uses natural contractions and smooth phrasing. Speech is intentional, never stiff or over-acted.

      Emotion:
      Warm, helpful, and present. The speaker sounds engaged and approachable, without being overly enthusiastic.

      Pronunciation:
      General American. Clear and fluent with linking and reductions (e.g., "gonna", "wanna"). Speech flows smoothly and sounds authentically native, but not exaggerated."#;

/// Where lesson data is read from and where audio is written to. Relative
/// paths resolve against the working directory, normally the app project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathSettings {
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            data_file: default_data_file(),
        }
    }
}

/// Speech synthesis service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default = "default_voice")]
    pub default_voice: String,

    #[serde(default = "default_response_format")]
    pub response_format: String,

    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Persona/affect instructions sent verbatim with every request. Empty
    /// disables them.
    #[serde(default = "default_instructions")]
    pub instructions: String,

    /// Unset means requests never time out.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            default_voice: default_voice(),
            response_format: default_response_format(),
            speed: default_speed(),
            instructions: default_instructions(),
            request_timeout_secs: None,
        }
    }
}

/// Process-wide configuration. Built once at startup and passed by reference
/// to everything that needs it; never mutated after loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Name of the environment variable holding the bearer API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub speech: SpeechSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            paths: PathSettings::default(),
            speech: SpeechSettings::default(),
        }
    }
}

impl Settings {
    /// Output file extension, derived from the requested audio encoding
    pub fn audio_extension(&self) -> &str {
        &self.speech.response_format
    }

    /// Destination path for the audio of the record with the given id
    pub fn audio_path_for(&self, record_id: &str) -> PathBuf {
        self.paths
            .audio_dir
            .join(format!("{record_id}.{}", self.audio_extension()))
    }
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("assets").join("audio")
}

fn default_data_file() -> PathBuf {
    PathBuf::from("lib").join("models").join("lesson_data.dart")
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini-tts".to_string()
}

fn default_voice() -> String {
    "nova".to_string()
}

fn default_response_format() -> String {
    "mp3".to_string()
}

fn default_speed() -> f32 {
    1.0
}

fn default_instructions() -> String {
    DEFAULT_INSTRUCTIONS.to_string()
}
