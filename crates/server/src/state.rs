use std::sync::Arc;

use service::sections::SectionTitleService;

#[derive(Clone)]
pub struct ServerState {
    pub sections: Arc<SectionTitleService>,
}

impl ServerState {
    pub fn new(sections: SectionTitleService) -> Self {
        Self { sections: Arc::new(sections) }
    }
}
