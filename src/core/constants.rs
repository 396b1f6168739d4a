// Dataset constants for the taxi dashboard

// Source column names (TLC yellow taxi export)
pub const COL_PICKUP_DATETIME: &str = "tpep_pickup_datetime";
pub const COL_PASSENGER_COUNT: &str = "passenger_count";
pub const COL_PAYMENT_TYPE: &str = "payment_type";
pub const COL_TRIP_DISTANCE: &str = "trip_distance";
pub const COL_TOTAL_AMOUNT: &str = "total_amount";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_PICKUP_DATETIME,
    COL_PASSENGER_COUNT,
    COL_PAYMENT_TYPE,
    COL_TRIP_DISTANCE,
    COL_TOTAL_AMOUNT,
];

// Accepted pickup timestamp layouts, tried in order
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Weekday names indexed by `pickup_weekday` (0 = Monday).
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Lunes",
    "Martes",
    "Miercoles",
    "Jueves",
    "Viernes",
    "Sabado",
    "Domingo",
];

/// Legend labels for the TLC payment type codes.
pub const PAYMENT_LABELS: &[(i64, &str)] = &[
    (1, "Tarjeta de Credito"),
    (2, "Efectivo"),
    (3, "Gratuito"),
    (4, "Disputa"),
];

pub fn payment_label(code: i64) -> Option<&'static str> {
    PAYMENT_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

// Sampled weeks: (calendar month, offset from UI day index to day-of-month).
// Day 0 is the first sampled day of each week in the two source files.
pub const JANUARY_WEEK: (u32, u32) = (1, 2);
pub const VALENTINE_WEEK: (u32, u32) = (2, 8);

// Fixed bar chart y-axis ranges
pub const TOTAL_DISTANCE_RANGE: [f64; 2] = [900_000.0, 1_250_000.0];
pub const MEAN_DISTANCE_RANGE: [f64; 2] = [2.0, 3.5];
