pub mod chart_routes;
pub mod info_routes;
