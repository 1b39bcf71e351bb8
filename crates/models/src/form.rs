//! Raw values as posted by the admin form: `{"sections": {"_new": {...}}}`.
//!
//! The edit form always posts its single row under `_new`, whatever record is
//! being edited; the hidden `id` field tells insert from update.

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::section::{parse_index, SectionDraft};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmittedSections {
    #[serde(default)]
    pub sections: SubmittedRows,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmittedRows {
    #[serde(rename = "_new", default)]
    pub new: Option<SubmittedSection>,
}

/// Hidden id field: empty for a new record, a position otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmittedSection {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "crate::flag::deserialize")]
    pub link: bool,
    #[serde(default)]
    pub link_path: String,
    #[serde(default)]
    pub paths: String,
}

impl SubmittedSections {
    /// Wrap a draft the way the form posts it.
    pub fn from_draft(draft: SectionDraft) -> Self {
        Self { sections: SubmittedRows { new: Some(SubmittedSection::from(draft)) } }
    }

    /// Extract and validate the single submitted row.
    pub fn into_draft(self) -> Result<SectionDraft, ModelError> {
        self.sections
            .new
            .ok_or_else(|| ModelError::Validation("no section submitted".into()))?
            .into_draft()
    }
}

impl From<SectionDraft> for SubmittedSection {
    fn from(d: SectionDraft) -> Self {
        Self {
            id: d.id.map(|i| RawId::Number(i as i64)),
            title: d.title,
            link: d.link,
            link_path: d.link_path,
            paths: d.paths,
        }
    }
}

impl SubmittedSection {
    /// Required fields: `title` and `paths`. The id must be empty or a non-negative integer.
    pub fn into_draft(self) -> Result<SectionDraft, ModelError> {
        let id = parse_id(self.id)?;
        validate_required("title", &self.title)?;
        validate_required("paths", &self.paths)?;
        Ok(SectionDraft {
            id,
            title: self.title,
            link: self.link,
            link_path: self.link_path,
            paths: self.paths,
        })
    }
}

fn parse_id(raw: Option<RawId>) -> Result<Option<usize>, ModelError> {
    match raw {
        None => Ok(None),
        Some(RawId::Number(n)) => usize::try_from(n)
            .map(Some)
            .map_err(|_| ModelError::Validation(format!("invalid section id {n}"))),
        Some(RawId::Text(s)) if s.is_empty() => Ok(None),
        Some(RawId::Text(s)) => parse_index(&s)
            .map(Some)
            .ok_or_else(|| ModelError::Validation(format!("invalid section id {s:?}"))),
    }
}

pub fn validate_required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} field is required")));
    }
    Ok(())
}
