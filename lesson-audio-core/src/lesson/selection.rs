use crate::error::GenerateError;
use crate::lesson::record::SentenceRecord;
use crate::options::GenerationOptions;

/// Narrow the records to the ones this run should voice.
///
/// An exact `id` wins over `lesson`. The lesson filter is a literal id
/// prefix, so `"flap"` also selects `"flap_t_1"`. With neither set every
/// record is returned in its original order. An empty filter value counts
/// as unset. An explicit filter that matches nothing is an error.
pub fn select_records(
    records: Vec<SentenceRecord>,
    options: &GenerationOptions,
) -> Result<Vec<SentenceRecord>, GenerateError> {
    if let Some(id) = options.id.as_deref().filter(|s| !s.is_empty()) {
        let selected: Vec<_> = records.into_iter().filter(|r| r.id == id).collect();
        if selected.is_empty() {
            return Err(GenerateError::IdNotFound { id: id.to_string() });
        }
        return Ok(selected);
    }

    if let Some(lesson) = options.lesson.as_deref().filter(|s| !s.is_empty()) {
        let selected: Vec<_> = records
            .into_iter()
            .filter(|r| r.id.starts_with(lesson))
            .collect();
        if selected.is_empty() {
            return Err(GenerateError::LessonNotFound {
                lesson: lesson.to_string(),
            });
        }
        return Ok(selected);
    }

    Ok(records)
}
