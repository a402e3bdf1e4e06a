use crate::settings::Settings;

/// Per-run choices taken from the command line. Read-only once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub voice: String,
    pub model: String,
    /// Keep records whose id starts with this string
    pub lesson: Option<String>,
    /// Keep only the record with exactly this id; wins over `lesson`
    pub id: Option<String>,
}

impl GenerationOptions {
    /// Options with no filter, using the configured default voice and model
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            voice: settings.speech.default_voice.clone(),
            model: settings.speech.default_model.clone(),
            lesson: None,
            id: None,
        }
    }

    /// Parse `--voice`, `--model`, `--lesson` and `--id`, each followed by
    /// one value. Anything else is ignored, as is a flag with no value after
    /// it. Later occurrences overwrite earlier ones. Never fails.
    ///
    /// `args` excludes the program name.
    pub fn parse<I, S>(args: I, settings: &Settings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut options = Self::from_settings(settings);

        let mut i = 0;
        while i < args.len() {
            let Some(value) = args.get(i + 1).cloned() else {
                break;
            };
            match args[i].as_str() {
                "--voice" => options.voice = value,
                "--model" => options.model = value,
                "--lesson" => options.lesson = Some(value),
                "--id" => options.id = Some(value),
                _ => {
                    i += 1;
                    continue;
                }
            }
            i += 2;
        }

        options
    }
}
