use std::sync::Arc;

use urlinfo_core::UrlDb;

#[derive(Clone)]
pub struct AppState {
    db: Arc<dyn UrlDb>,
}

impl AppState {
    pub fn new(db: Arc<dyn UrlDb>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &dyn UrlDb {
        self.db.as_ref()
    }
}
