use std::sync::Arc;
use std::time::Instant;
use railbook_store::TrainCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TrainCatalog>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(catalog: TrainCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            started_at: Instant::now(),
        }
    }
}
