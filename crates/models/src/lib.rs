//! Data model for section titles.
//! - `section`: stored records, drafts and lookup keys
//! - `form`: raw submitted form values and their validation into drafts
//! - `settings`: the persisted configuration blob
//! - `paths`: path-pattern matching for a section's `paths`

pub mod errors;
pub mod section;
pub mod form;
pub mod settings;
pub mod paths;

mod flag;

pub use section::{Section, SectionDraft, SectionKey, NEW_SECTION_KEY};
pub use settings::SectionTitleSettings;
