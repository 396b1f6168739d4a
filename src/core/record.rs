// Trip record types for the taxi dataset

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::core::constants::*;
use crate::core::error::{DashboardError, Result};

/// One CSV row as it appears in the TLC export. Extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "tpep_pickup_datetime")]
    pub pickup_datetime: String,
    pub passenger_count: Option<f64>,
    pub payment_type: Option<f64>,
    pub trip_distance: f64,
    pub total_amount: f64,
}

/// A single taxi trip with its derived pickup fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub pickup_datetime: NaiveDateTime,
    pub passenger_count: Option<u32>,
    pub payment_type: Option<i64>,
    pub trip_distance: f64,
    pub total_amount: f64,
    /// 0-23
    pub pickup_hour: u32,
    /// 0 = Monday .. 6 = Sunday
    pub pickup_weekday: u32,
}

impl TripRecord {
    pub fn new(
        pickup_datetime: NaiveDateTime,
        passenger_count: Option<u32>,
        payment_type: Option<i64>,
        trip_distance: f64,
        total_amount: f64,
    ) -> Self {
        Self {
            pickup_datetime,
            passenger_count,
            payment_type,
            trip_distance,
            total_amount,
            pickup_hour: pickup_datetime.hour(),
            pickup_weekday: pickup_datetime.weekday().num_days_from_monday(),
        }
    }

    /// Build a record from a raw CSV row. `line` is the row's line in the
    /// source file and is only used for error reporting.
    pub fn from_raw(raw: RawTrip, line: u64) -> Result<Self> {
        let pickup_datetime = parse_timestamp(&raw.pickup_datetime).ok_or_else(|| {
            DashboardError::InvalidTimestamp {
                line,
                value: raw.pickup_datetime.clone(),
            }
        })?;

        Ok(Self::new(
            pickup_datetime,
            raw.passenger_count.and_then(whole_u32),
            raw.payment_type.and_then(whole_i64),
            raw.trip_distance,
            raw.total_amount,
        ))
    }

    pub fn month(&self) -> u32 {
        self.pickup_datetime.month()
    }

    pub fn day_of_month(&self) -> u32 {
        self.pickup_datetime.day()
    }
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

// Counts and codes sometimes come through as "1.0" once a column holds blanks.
fn whole_u32(v: f64) -> Option<u32> {
    (v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64).then_some(v as u32)
}

fn whole_i64(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}
