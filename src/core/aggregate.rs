// Week/day scoping and chart aggregates over the trip dataset

use serde::Serialize;
use tracing::debug;

use crate::core::constants::{payment_label, DAYS_PER_WEEK, HOURS_PER_DAY, WEEKDAY_NAMES};
use crate::core::dataset::TripDataset;
use crate::core::record::TripRecord;
use crate::core::selection::{DistanceMode, PieMode, Selection, WeekId};

/// Borrowed subset of the dataset. Building one never touches the dataset itself.
pub type TripView<'a> = Vec<&'a TripRecord>;

/// Rows of the selected week's calendar month, or every row when no week is selected.
pub fn week_scope(dataset: &TripDataset, week: Option<WeekId>) -> TripView<'_> {
    match week {
        Some(week) => {
            let month = week.month();
            dataset
                .records()
                .iter()
                .filter(|r| r.month() == month)
                .collect()
        }
        None => dataset.records().iter().collect(),
    }
}

/// Rows on the given day-of-month. Without a day there is nothing to scope to,
/// so the result is empty.
pub fn day_scope<'a>(week_rows: &[&'a TripRecord], absolute_day: Option<u32>) -> TripView<'a> {
    match absolute_day {
        Some(day) => week_rows
            .iter()
            .copied()
            .filter(|r| r.day_of_month() == day)
            .collect(),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Mean `total_amount` per pickup hour, indexed 0..24. Hours with no trips are `None`.
pub fn hourly_mean_fare(rows: &[&TripRecord]) -> Vec<Option<f64>> {
    let mut hours = [MeanAcc::default(); HOURS_PER_DAY];
    for r in rows {
        if let Some(acc) = hours.get_mut(r.pickup_hour as usize) {
            acc.push(r.total_amount);
        }
    }
    hours.iter().map(MeanAcc::mean).collect()
}

/// One pie slice: a category label and how many trips fall in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// `None` for missing values and unrecognized payment codes.
    pub label: Option<String>,
    pub count: u64,
}

/// Trip counts per passenger count or payment method, in first-seen order.
pub fn category_distribution(rows: &[&TripRecord], mode: PieMode) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = Vec::new();

    for r in rows {
        let label = match mode {
            PieMode::Passengers => r.passenger_count.map(|c| c.to_string()),
            PieMode::PaymentMethod => r
                .payment_type
                .and_then(payment_label)
                .map(str::to_string),
        };

        match out.iter_mut().find(|c| c.label == label) {
            Some(slot) => slot.count += 1,
            None => out.push(CategoryCount { label, count: 1 }),
        }
    }

    out
}

/// Distance aggregate for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayDistance {
    pub weekday: &'static str,
    /// Sum is 0 for a weekday with no trips; the mean is `None`.
    pub value: Option<f64>,
}

/// Sum or mean of `trip_distance` per weekday, always Monday through Sunday.
pub fn weekday_distance(rows: &[&TripRecord], mode: DistanceMode) -> Vec<WeekdayDistance> {
    let mut days = [MeanAcc::default(); DAYS_PER_WEEK];
    for r in rows {
        if let Some(acc) = days.get_mut(r.pickup_weekday as usize) {
            acc.push(r.trip_distance);
        }
    }

    WEEKDAY_NAMES
        .iter()
        .zip(days.iter())
        .map(|(name, acc)| WeekdayDistance {
            weekday: *name,
            value: match mode {
                DistanceMode::Total => Some(acc.sum),
                DistanceMode::Mean => acc.mean(),
            },
        })
        .collect()
}

/// Everything the three charts need for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    pub hourly_fare: Vec<Option<f64>>,
    pub categories: Vec<CategoryCount>,
    pub weekday_distance: Vec<WeekdayDistance>,
}

pub fn aggregate(dataset: &TripDataset, selection: &Selection) -> Aggregates {
    let week_rows = week_scope(dataset, selection.week);
    let day_rows = day_scope(&week_rows, selection.absolute_day());

    debug!(
        "Scoped {} week rows, {} day rows (week={:?}, day={:?})",
        week_rows.len(),
        day_rows.len(),
        selection.week,
        selection.absolute_day()
    );

    Aggregates {
        hourly_fare: hourly_mean_fare(&day_rows),
        categories: category_distribution(&week_rows, selection.pie_mode),
        weekday_distance: weekday_distance(&week_rows, selection.distance_mode),
    }
}
