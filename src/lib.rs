// NYC taxi trip dashboard
// Library entry point: dataset loading, aggregation, chart descriptors and page layout

pub mod core;
pub mod ui;

// Re-export main types
pub use crate::core::chart::{render_dashboard, DashboardFigures};
pub use crate::core::dataset::TripDataset;
pub use crate::core::error::{DashboardError, Result};
pub use crate::core::record::TripRecord;
pub use crate::core::selection::{DayIndex, DistanceMode, PieMode, Selection, WeekId};
pub use crate::ui::layout::DashboardLayout;
pub use crate::ui::page::render_page;
