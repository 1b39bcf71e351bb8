use serde::{Deserialize, Serialize};

/// Identifier the admin UI uses for "no existing record, start a blank draft".
pub const NEW_SECTION_KEY: &str = "_new";

/// A stored section title. `id` always equals the record's position in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: usize,
    pub title: String,
    #[serde(default, deserialize_with = "crate::flag::deserialize")]
    pub link: bool,
    #[serde(default)]
    pub link_path: String,
    #[serde(default)]
    pub paths: String,
}

impl Section {
    /// Materialize a draft at the given position.
    pub fn from_draft(draft: SectionDraft, id: usize) -> Self {
        Self {
            id,
            title: draft.title,
            link: draft.link,
            link_path: draft.link_path,
            paths: draft.paths,
        }
    }

    /// The link target, only when linking is enabled and a path was given.
    pub fn link_target(&self) -> Option<&str> {
        let p = self.link_path.trim();
        if self.link && !p.is_empty() { Some(p) } else { None }
    }
}

/// A section being added or edited before it is committed.
/// `id == None` means "not yet assigned, append".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    #[serde(default)]
    pub id: Option<usize>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: bool,
    #[serde(default)]
    pub link_path: String,
    #[serde(default)]
    pub paths: String,
}

impl SectionDraft {
    /// The blank draft handed out for `_new` and for unknown identifiers.
    pub fn blank() -> Self {
        Self::default()
    }
}

impl From<&Section> for SectionDraft {
    fn from(s: &Section) -> Self {
        Self {
            id: Some(s.id),
            title: s.title.clone(),
            link: s.link,
            link_path: s.link_path.clone(),
            paths: s.paths.clone(),
        }
    }
}

/// Parsed lookup identifier from a route or form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionKey {
    New,
    Index(usize),
    /// Anything else; looked up like a missing record.
    Unrecognized(String),
}

/// Parse a list position written as a canonical decimal: digits only, no
/// sign or whitespace, no leading zero except `"0"` itself.
pub fn parse_index(raw: &str) -> Option<usize> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if canonical { raw.parse().ok() } else { None }
}

impl SectionKey {
    pub fn parse(raw: &str) -> Self {
        if raw == NEW_SECTION_KEY {
            return SectionKey::New;
        }
        match parse_index(raw) {
            Some(i) => SectionKey::Index(i),
            None => SectionKey::Unrecognized(raw.to_string()),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, SectionKey::New)
    }
}

impl From<&str> for SectionKey {
    fn from(raw: &str) -> Self {
        SectionKey::parse(raw)
    }
}

impl From<usize> for SectionKey {
    fn from(i: usize) -> Self {
        SectionKey::Index(i)
    }
}
