pub mod record;
pub mod selection;

pub use record::{extract_records, load_records, SentenceRecord};
pub use selection::select_records;
