use std::sync::Arc;

use taxi_charts::{DashboardLayout, TripDataset};

/// Shared, read-only for the life of the process. Requests never write to it,
/// so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<TripDataset>,
    pub layout: Arc<DashboardLayout>,
}

impl AppState {
    pub fn new(dataset: TripDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(DashboardLayout::new()),
        }
    }
}
