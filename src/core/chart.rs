// Chart descriptors built from the aggregates
//
// Descriptors are plain data. The page script maps them onto Plotly traces,
// but nothing here depends on a particular rendering library.

use serde::Serialize;

use crate::core::aggregate::{aggregate, Aggregates, CategoryCount, WeekdayDistance};
use crate::core::constants::{MEAN_DISTANCE_RANGE, TOTAL_DISTANCE_RANGE, WEEKDAY_NAMES};
use crate::core::dataset::TripDataset;
use crate::core::selection::{DistanceMode, PieMode, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// Fixed category order for categorical axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Axis {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            range: None,
            categories: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub kind: ChartKind,
    pub title: String,
    pub x: Vec<u32>,
    /// `null` where an hour has no trips.
    pub y: Vec<Option<f64>>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub kind: ChartKind,
    pub title: String,
    /// `null` labels are undefined categories (missing values, unknown codes).
    pub labels: Vec<Option<String>>,
    pub values: Vec<u64>,
    pub legend_trace_order: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub kind: ChartKind,
    pub title: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

/// The three charts redrawn together on every control change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFigures {
    pub line: LineChart,
    pub pie: PieChart,
    pub bar: BarChart,
}

/// Hourly fares plotted at x = 1..24, hour `h` at `h + 1`.
pub fn line_chart(hourly_fare: &[Option<f64>]) -> LineChart {
    LineChart {
        kind: ChartKind::Line,
        title: "Pagos".to_string(),
        x: (1..=hourly_fare.len() as u32).collect(),
        y: hourly_fare.to_vec(),
        x_axis: Axis::titled("Hora del dia"),
        y_axis: Axis::titled("Total ($)"),
    }
}

pub fn pie_chart(categories: &[CategoryCount], mode: PieMode) -> PieChart {
    let title = match mode {
        PieMode::Passengers => "Distribucion de pasajeros",
        PieMode::PaymentMethod => "Distribucion de metodos de pago",
    };

    PieChart {
        kind: ChartKind::Pie,
        title: title.to_string(),
        labels: categories.iter().map(|c| c.label.clone()).collect(),
        values: categories.iter().map(|c| c.count).collect(),
        legend_trace_order: "normal",
    }
}

pub fn bar_chart(weekdays: &[WeekdayDistance], mode: DistanceMode) -> BarChart {
    let (y_title, title, range) = match mode {
        DistanceMode::Total => (
            "Kilometros Recorridos",
            "Kilometros Recorridos por Dia",
            TOTAL_DISTANCE_RANGE,
        ),
        DistanceMode::Mean => (
            "Media de Kilómetros Recorridos",
            "Media de Kilómetros Recorridos por Día",
            MEAN_DISTANCE_RANGE,
        ),
    };

    BarChart {
        kind: ChartKind::Bar,
        title: title.to_string(),
        x: weekdays.iter().map(|d| d.weekday.to_string()).collect(),
        y: weekdays.iter().map(|d| d.value).collect(),
        x_axis: Axis {
            categories: Some(WEEKDAY_NAMES.iter().map(|n| n.to_string()).collect()),
            ..Axis::titled("Dia de la Semana")
        },
        y_axis: Axis {
            range: Some(range),
            ..Axis::titled(y_title)
        },
    }
}

pub fn figures(aggregates: &Aggregates, selection: &Selection) -> DashboardFigures {
    DashboardFigures {
        line: line_chart(&aggregates.hourly_fare),
        pie: pie_chart(&aggregates.categories, selection.pie_mode),
        bar: bar_chart(&aggregates.weekday_distance, selection.distance_mode),
    }
}

/// Scope, aggregate and describe all three charts for one selection.
pub fn render_dashboard(dataset: &TripDataset, selection: &Selection) -> DashboardFigures {
    figures(&aggregate(dataset, selection), selection)
}
