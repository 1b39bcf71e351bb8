use std::sync::Arc;

use models::form::SubmittedSections;
use models::{Section, SectionDraft, SectionKey, SectionTitleSettings};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::sections::list::{self, UpsertOutcome};
use crate::storage::ConfigStore;

/// Route of the section title overview, offered as the form's cancel target.
pub const LIST_ROUTE: &str = "/admin/section-titles";

/// What the admin form needs to render one row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionForm {
    pub is_new: bool,
    pub heading: String,
    pub submit_label: String,
    /// Only offered when editing an existing identifier.
    pub cancel_route: Option<String>,
    /// Absolute site URL shown in front of the link path input.
    pub link_path_prefix: String,
    pub section: SectionDraft,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmitResult {
    pub outcome: UpsertOutcome,
    pub message: String,
    pub section: Section,
    pub sections: Vec<Section>,
}

/// Read-modify-write access to the section list stored under one config key.
///
/// Each call reads the whole blob and, for writes, replaces it. Nothing is
/// serialised between callers: two concurrent submits built from the same
/// read both succeed and the later write wins.
#[derive(Clone)]
pub struct SectionTitleService {
    store: Arc<dyn ConfigStore>,
    settings_key: String,
    base_url: String,
}

impl SectionTitleService {
    pub fn new(store: Arc<dyn ConfigStore>, settings_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { store, settings_key: settings_key.into(), base_url: base_url.into() }
    }

    pub fn settings_key(&self) -> &str {
        &self.settings_key
    }

    /// Current list, renumbered so ids match positions even for hand-edited blobs.
    pub async fn load(&self) -> Result<Vec<Section>, ServiceError> {
        let blob = self.store.read(&self.settings_key).await?;
        let mut sections = SectionTitleSettings::from_blob(blob)?.sections;
        if !list::is_sequential(&sections) {
            debug!(key = %self.settings_key, "stored section ids out of order; renumbering");
            list::renumber(&mut sections);
        }
        Ok(sections)
    }

    async fn save(&self, sections: Vec<Section>) -> Result<Vec<Section>, ServiceError> {
        let settings = SectionTitleSettings { sections };
        self.store.write(&self.settings_key, settings.to_blob()?).await?;
        Ok(settings.sections)
    }

    pub async fn list(&self) -> Result<Vec<Section>, ServiceError> {
        self.load().await
    }

    pub async fn get(&self, identifier: &str) -> Result<SectionDraft, ServiceError> {
        let sections = self.load().await?;
        Ok(list::get_section(&sections, &SectionKey::parse(identifier)))
    }

    pub async fn render(&self, identifier: &str) -> Result<SectionForm, ServiceError> {
        let key = SectionKey::parse(identifier);
        let sections = self.load().await?;
        let section = list::get_section(&sections, &key);
        let is_new = key.is_new();
        let form = SectionForm {
            is_new,
            heading: if is_new { "Add new section title" } else { "Edit section title" }.into(),
            submit_label: if is_new { "Save section title" } else { "Update section title" }.into(),
            cancel_route: (!is_new).then(|| LIST_ROUTE.to_string()),
            link_path_prefix: self.base_url.clone(),
            section,
        };
        debug!(identifier, is_new, found = form.section.id.is_some(), "rendered section form");
        Ok(form)
    }

    /// Validate the posted row, upsert it and persist the whole list.
    /// Invalid input never reaches the store.
    pub async fn submit(&self, values: SubmittedSections) -> Result<SubmitResult, ServiceError> {
        let draft = values.into_draft()?;
        self.save_draft(draft).await
    }

    /// Upsert an already validated draft.
    pub async fn save_draft(&self, draft: SectionDraft) -> Result<SubmitResult, ServiceError> {
        let sections = self.load().await?;
        let before = sections.len();
        let upserted = list::upsert(sections, draft);
        let index = upserted.index;
        let outcome = upserted.outcome;
        let sections = self.save(upserted.sections).await?;
        let section = sections[index].clone();
        let message = outcome.message(&section.title);
        info!(
            key = %self.settings_key,
            id = section.id,
            outcome = ?outcome,
            before,
            after = sections.len(),
            "section title saved"
        );
        Ok(SubmitResult { outcome, message, section, sections })
    }

    pub async fn section_for_path(&self, path: &str) -> Result<Option<Section>, ServiceError> {
        let sections = self.load().await?;
        Ok(list::section_for_path(&sections, path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileConfigStore, MemoryConfigStore};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const KEY: &str = "section_titles.settings";

    fn service_with(store: Arc<dyn ConfigStore>) -> SectionTitleService {
        SectionTitleService::new(store, KEY, "https://www.example.edu/")
    }

    fn home_store() -> Arc<MemoryConfigStore> {
        Arc::new(MemoryConfigStore::with_entry(
            KEY,
            json!({"sections": [{"id": 0, "title": "Home", "link": false, "link_path": "", "paths": "/"}]}),
        ))
    }

    fn submission(id: Value, title: &str, paths: &str) -> SubmittedSections {
        serde_json::from_value(json!({
            "sections": {"_new": {"id": id, "title": title, "link": false, "link_path": "", "paths": paths}}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn submit_appends_and_persists() -> Result<(), anyhow::Error> {
        let store = home_store();
        let svc = service_with(store.clone());

        let res = svc.submit(submission(json!(""), "About", "/about")).await?;
        assert_eq!(res.outcome, UpsertOutcome::Appended);
        assert_eq!(res.message, "A section title named About has been added.");
        assert_eq!(res.section.id, 1);

        let stored = store.read(KEY).await?.unwrap();
        assert_eq!(
            stored,
            json!({"sections": [
                {"id": 0, "title": "Home", "link": false, "link_path": "", "paths": "/"},
                {"id": 1, "title": "About", "link": false, "link_path": "", "paths": "/about"}
            ]})
        );
        Ok(())
    }

    #[tokio::test]
    async fn submit_overwrites_existing() -> Result<(), anyhow::Error> {
        let svc = service_with(home_store());
        let res = svc.submit(submission(json!("0"), "Homepage", "/")).await?;
        assert_eq!(res.outcome, UpsertOutcome::Overwritten);
        assert_eq!(res.message, "The section title named Homepage has been updated.");
        let list = svc.list().await?;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Homepage");
        Ok(())
    }

    #[tokio::test]
    async fn render_new_and_existing() -> Result<(), anyhow::Error> {
        let svc = service_with(home_store());

        let form = svc.render("_new").await?;
        assert!(form.is_new);
        assert_eq!(form.heading, "Add new section title");
        assert_eq!(form.submit_label, "Save section title");
        assert_eq!(form.cancel_route, None);
        assert_eq!(form.section, SectionDraft::blank());
        assert_eq!(form.link_path_prefix, "https://www.example.edu/");

        let form = svc.render("0").await?;
        assert!(!form.is_new);
        assert_eq!(form.heading, "Edit section title");
        assert_eq!(form.submit_label, "Update section title");
        assert_eq!(form.cancel_route.as_deref(), Some(LIST_ROUTE));
        assert_eq!(form.section.id, Some(0));
        assert_eq!(form.section.title, "Home");

        // unknown identifiers render a blank row in edit mode
        let form = svc.render("17").await?;
        assert!(!form.is_new);
        assert_eq!(form.section, SectionDraft::blank());
        Ok(())
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() -> Result<(), anyhow::Error> {
        let svc = service_with(Arc::new(MemoryConfigStore::new()));
        assert!(svc.list().await?.is_empty());
        assert_eq!(svc.get("0").await?, SectionDraft::blank());
        Ok(())
    }

    #[tokio::test]
    async fn stale_ids_are_renumbered_on_load() -> Result<(), anyhow::Error> {
        let store = Arc::new(MemoryConfigStore::with_entry(
            KEY,
            json!({"sections": [{"id": 3, "title": "A", "paths": "a"}, {"id": 3, "title": "B", "paths": "b"}]}),
        ));
        let svc = service_with(store);
        let ids: Vec<_> = svc.list().await?.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1]);
        Ok(())
    }

    /// Counts writes and can be told to fail them.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryConfigStore,
        writes: AtomicUsize,
        fail_writes: bool,
    }

    #[async_trait]
    impl ConfigStore for FlakyStore {
        async fn read(&self, key: &str) -> Result<Option<Value>, ServiceError> {
            self.inner.read(key).await
        }

        async fn write(&self, key: &str, value: Value) -> Result<(), ServiceError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(ServiceError::Storage("store unavailable".into()));
            }
            self.inner.write(key, value).await
        }
    }

    #[tokio::test]
    async fn invalid_submission_never_writes() {
        let store = Arc::new(FlakyStore::default());
        let svc = service_with(store.clone());
        let err = svc.submit(submission(json!(""), "", "/x")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = svc.submit(submission(json!("abc"), "T", "/x")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(store.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let store = Arc::new(FlakyStore { fail_writes: true, ..Default::default() });
        let svc = service_with(store.clone());
        let err = svc.submit(submission(json!(""), "T", "/x")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_blob_is_not_silently_reset() {
        let store = Arc::new(MemoryConfigStore::with_entry(KEY, json!({"sections": 5})));
        let svc = service_with(store);
        assert!(matches!(svc.list().await, Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn concurrent_edits_last_write_wins() -> Result<(), anyhow::Error> {
        let store = home_store();
        let svc = service_with(store.clone());

        // both editors start from the same read
        let snapshot = svc.load().await?;
        let a = list::upsert(snapshot.clone(), SectionDraft { title: "A".into(), paths: "a".into(), ..Default::default() });
        let b = list::upsert(snapshot, SectionDraft { title: "B".into(), paths: "b".into(), ..Default::default() });
        svc.save(a.sections).await?;
        svc.save(b.sections).await?;

        let titles: Vec<_> = svc.list().await?.into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Home".to_string(), "B".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn file_backed_round_trip() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("section_titles_svc_{}", uuid::Uuid::new_v4()));
        let store = JsonFileConfigStore::new(&dir).await?;
        let svc = service_with(store);
        svc.submit(submission(json!(""), "Programs", "programs\nprograms/*")).await?;
        svc.submit(submission(json!(""), "Faculty", "faculty/*")).await?;

        let reopened = service_with(JsonFileConfigStore::new(&dir).await?);
        let found = reopened.section_for_path("/programs/mba").await?;
        assert_eq!(found.map(|s| s.title), Some("Programs".to_string()));
        assert_eq!(reopened.section_for_path("/alumni").await?, None);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
