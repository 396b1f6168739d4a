pub mod aggregate;
pub mod chart;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod record;
pub mod selection;
