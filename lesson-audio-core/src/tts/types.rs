use serde::Serialize;

/// JSON body of a speech synthesis request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub voice: &'a str,
    pub response_format: &'a str,
    pub speed: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_instructions: Option<&'a str>,
}
