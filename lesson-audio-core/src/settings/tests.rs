use crate::error::GenerateError;
use crate::settings::loader::LOCAL_CONFIG_FILE;
use crate::settings::{load_settings_from, Settings};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_built_in_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.api_key_env, "OPENAI_API_KEY");
    assert_eq!(settings.speech.default_voice, "nova");
    assert_eq!(settings.speech.default_model, "gpt-4o-mini-tts");
    assert_eq!(settings.speech.response_format, "mp3");
    assert_eq!(settings.speech.speed, 1.0);
    assert_eq!(settings.speech.request_timeout_secs, None);
    assert!(settings
        .speech
        .instructions
        .starts_with("\n      Identity:\n      American speaker"));
    assert!(settings
        .speech
        .instructions
        .ends_with("but not exaggerated."));
    assert_eq!(settings.paths.audio_dir, PathBuf::from("assets/audio"));
    assert_eq!(
        settings.paths.data_file,
        PathBuf::from("lib/models/lesson_data.dart")
    );
}

#[test]
fn test_audio_path_uses_response_format_extension() {
    let mut settings = Settings::default();
    settings.paths.audio_dir = PathBuf::from("/tmp/out");

    assert_eq!(
        settings.audio_path_for("elision_1"),
        PathBuf::from("/tmp/out/elision_1.mp3")
    );

    settings.speech.response_format = "wav".to_string();
    assert_eq!(
        settings.audio_path_for("elision_1"),
        PathBuf::from("/tmp/out/elision_1.wav")
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &settings_path,
        "[speech]\ndefault_voice = \"alloy\"\nrequest_timeout_secs = 30\n",
    )
    .unwrap();

    let settings = Settings::from_path(&settings_path).unwrap();

    assert_eq!(settings.speech.default_voice, "alloy");
    assert_eq!(settings.speech.request_timeout_secs, Some(30));
    assert_eq!(settings.speech.default_model, "gpt-4o-mini-tts");
    assert_eq!(settings.paths, Settings::default().paths);
    assert_eq!(settings.api_key_env, "OPENAI_API_KEY");
}

#[test]
fn test_round_trips_through_toml() {
    let settings = Settings::default();
    let contents = toml::to_string_pretty(&settings).unwrap();
    let parsed: Settings = toml::from_str(&contents).unwrap();

    assert_eq!(parsed, settings);
}

#[test]
fn test_local_file_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(LOCAL_CONFIG_FILE),
        "api_key_env = \"MY_TTS_KEY\"\n",
    )
    .unwrap();

    let settings = load_settings_from(None, temp_dir.path()).unwrap();

    assert_eq!(settings.api_key_env, "MY_TTS_KEY");
}

#[test]
fn test_explicit_path_wins_over_local_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(LOCAL_CONFIG_FILE),
        "api_key_env = \"LOCAL_KEY\"\n",
    )
    .unwrap();
    let explicit = temp_dir.path().join("explicit.toml");
    std::fs::write(&explicit, "api_key_env = \"EXPLICIT_KEY\"\n").unwrap();

    let settings = load_settings_from(Some(explicit.as_path()), temp_dir.path()).unwrap();

    assert_eq!(settings.api_key_env, "EXPLICIT_KEY");
}

#[test]
fn test_no_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let settings = load_settings_from(None, temp_dir.path()).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_invalid_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("broken.toml");
    std::fs::write(&settings_path, "[speech\nvoice = ").unwrap();

    let err = Settings::from_path(&settings_path).unwrap_err();

    assert!(matches!(err, GenerateError::Config { .. }));
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = load_settings_from(Some(missing.as_path()), temp_dir.path()).unwrap_err();

    assert!(matches!(err, GenerateError::Config { path, .. } if path == missing));
}

#[test]
fn test_unset_credential_is_reported_by_name() {
    let settings = Settings {
        api_key_env: "LESSON_AUDIO_TEST_UNSET_KEY_7c1f".to_string(),
        ..Settings::default()
    };

    let err = settings.api_key().unwrap_err();

    assert!(
        matches!(err, GenerateError::MissingCredential { ref var } if var == "LESSON_AUDIO_TEST_UNSET_KEY_7c1f")
    );
}

#[test]
fn test_empty_credential_counts_as_missing() {
    let var = "LESSON_AUDIO_TEST_EMPTY_KEY_3a9e";
    std::env::set_var(var, "");
    let settings = Settings {
        api_key_env: var.to_string(),
        ..Settings::default()
    };

    let err = settings.api_key().unwrap_err();

    assert!(matches!(err, GenerateError::MissingCredential { .. }));
}

#[test]
fn test_whitespace_credential_is_passed_through() {
    let var = "LESSON_AUDIO_TEST_BLANK_KEY_5d2b";
    std::env::set_var(var, "   ");
    let settings = Settings {
        api_key_env: var.to_string(),
        ..Settings::default()
    };

    assert_eq!(settings.api_key().unwrap(), "   ");
}
