pub mod list;
pub mod service;

pub use list::{get_section, renumber, section_for_path, upsert, UpsertOutcome, Upserted};
pub use service::{SectionForm, SectionTitleService, SubmitResult};
