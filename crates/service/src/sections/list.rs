//! Operations on the ordered section list.
//!
//! The list is a plain `Vec<Section>`; position is identity. Every mutation
//! ends with `renumber` so that `list[i].id == i` holds on the way out.

use models::{Section, SectionDraft, SectionKey};
use serde::Serialize;

/// Which branch an upsert took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// An existing record was replaced in place.
    Overwritten,
    /// The draft became the new last record.
    Appended,
}

impl UpsertOutcome {
    /// User-facing confirmation for a saved section.
    pub fn message(&self, title: &str) -> String {
        match self {
            UpsertOutcome::Overwritten => format!("The section title named {title} has been updated."),
            UpsertOutcome::Appended => format!("A section title named {title} has been added."),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upserted {
    pub sections: Vec<Section>,
    /// Final position of the written record.
    pub index: usize,
    pub outcome: UpsertOutcome,
}

/// Look a section up by key. `_new`, out-of-range and malformed keys all give
/// the blank draft.
pub fn get_section(list: &[Section], key: &SectionKey) -> SectionDraft {
    match key {
        SectionKey::Index(i) => list.get(*i).map(SectionDraft::from).unwrap_or_default(),
        SectionKey::New | SectionKey::Unrecognized(_) => SectionDraft::blank(),
    }
}

/// Overwrite the record at `draft.id`, or append when the id is empty or
/// past the end, then renumber.
pub fn upsert(mut list: Vec<Section>, draft: SectionDraft) -> Upserted {
    let count = list.len();
    let target = draft.id.unwrap_or(count);

    let (index, outcome) = if target < count {
        list[target] = Section::from_draft(draft, target);
        (target, UpsertOutcome::Overwritten)
    } else {
        list.push(Section::from_draft(draft, count));
        (count, UpsertOutcome::Appended)
    };

    renumber(&mut list);
    Upserted { sections: list, index, outcome }
}

/// Set every record's id to its position.
pub fn renumber(list: &mut [Section]) {
    for (i, section) in list.iter_mut().enumerate() {
        section.id = i;
    }
}

pub fn is_sequential(list: &[Section]) -> bool {
    list.iter().enumerate().all(|(i, s)| s.id == i)
}

/// First section, in list order, with a pattern matching `path`.
pub fn section_for_path<'a>(list: &'a [Section], path: &str) -> Option<&'a Section> {
    list.iter().find(|s| s.matches_path(path))
}
