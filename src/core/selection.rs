// Dashboard control selections, validated at the boundary

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::constants::{DAYS_PER_WEEK, JANUARY_WEEK, VALENTINE_WEEK};
use crate::core::error::{DashboardError, Result};

/// Day position within the selected week, 0..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayIndex(u8);

impl DayIndex {
    pub fn new(index: u8) -> Result<Self> {
        if (index as usize) < DAYS_PER_WEEK {
            Ok(DayIndex(index))
        } else {
            Err(DashboardError::unknown_selection("day", index.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for DayIndex {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| DashboardError::unknown_selection("day", s))
            .and_then(DayIndex::new)
    }
}

/// Which categorical field feeds the pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PieMode {
    #[default]
    #[serde(rename = "Pasajeros")]
    Passengers,
    #[serde(rename = "Metodo de Pago")]
    PaymentMethod,
}

/// Aggregation applied to trip distance per weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DistanceMode {
    #[default]
    #[serde(rename = "Kilometros Totales")]
    Total,
    #[serde(rename = "Kilometros Mediana")]
    Mean,
}

/// One of the two sampled weeks in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeekId {
    January,
    Valentine,
}

impl WeekId {
    pub fn month(self) -> u32 {
        match self {
            WeekId::January => JANUARY_WEEK.0,
            WeekId::Valentine => VALENTINE_WEEK.0,
        }
    }

    pub fn day_offset(self) -> u32 {
        match self {
            WeekId::January => JANUARY_WEEK.1,
            WeekId::Valentine => VALENTINE_WEEK.1,
        }
    }

    /// Absolute day-of-month shown for `day` within this week.
    pub fn absolute_day(self, day: DayIndex) -> u32 {
        day.get() as u32 + self.day_offset()
    }
}

macro_rules! wire_enum {
    ($ty:ty, $field:literal, { $($variant:path => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($variant => $wire,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = DashboardError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($wire => Ok($variant),)+
                    other => Err(DashboardError::unknown_selection($field, other)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(PieMode, "pas_pay", {
    PieMode::Passengers => "Pasajeros",
    PieMode::PaymentMethod => "Metodo de Pago",
});

wire_enum!(DistanceMode, "km", {
    DistanceMode::Total => "Kilometros Totales",
    DistanceMode::Mean => "Kilometros Mediana",
});

wire_enum!(WeekId, "week", {
    WeekId::January => "January",
    WeekId::Valentine => "Valentine",
});

/// The four dashboard control values for one chart update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub day: DayIndex,
    pub pie_mode: PieMode,
    pub distance_mode: DistanceMode,
    /// `None` when no week radio is selected.
    pub week: Option<WeekId>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            day: DayIndex::default(),
            pie_mode: PieMode::default(),
            distance_mode: DistanceMode::default(),
            week: Some(WeekId::January),
        }
    }
}

impl Selection {
    /// Validate raw control values. Absent controls take their initial value,
    /// except `week` where absent or blank means no selection.
    pub fn parse(
        day: Option<&str>,
        pie_mode: Option<&str>,
        distance_mode: Option<&str>,
        week: Option<&str>,
    ) -> Result<Self> {
        let defaults = Selection::default();

        Ok(Self {
            day: day.map(str::parse::<DayIndex>).transpose()?.unwrap_or(defaults.day),
            pie_mode: pie_mode
                .map(str::parse::<PieMode>)
                .transpose()?
                .unwrap_or(defaults.pie_mode),
            distance_mode: distance_mode
                .map(str::parse::<DistanceMode>)
                .transpose()?
                .unwrap_or(defaults.distance_mode),
            week: week
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::parse::<WeekId>)
                .transpose()?,
        })
    }

    /// Absolute day-of-month to scope to, if a week is selected.
    pub fn absolute_day(&self) -> Option<u32> {
        self.week.map(|w| w.absolute_day(self.day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_day_offsets() {
        let d0 = DayIndex::new(0).unwrap();
        let d6 = DayIndex::new(6).unwrap();
        assert_eq!(WeekId::January.absolute_day(d0), 2);
        assert_eq!(WeekId::January.absolute_day(d6), 8);
        assert_eq!(WeekId::Valentine.absolute_day(d0), 8);
        assert_eq!(WeekId::Valentine.absolute_day(d6), 14);
    }

    #[test]
    fn test_day_index_bounds() {
        assert!(DayIndex::new(6).is_ok());
        assert!(DayIndex::new(7).is_err());
        assert!("7".parse::<DayIndex>().is_err());
        assert!("lunes".parse::<DayIndex>().is_err());
        assert_eq!("3".parse::<DayIndex>().unwrap().get(), 3);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!("Pasajeros".parse::<PieMode>().unwrap(), PieMode::Passengers);
        assert_eq!(
            "Metodo de Pago".parse::<PieMode>().unwrap(),
            PieMode::PaymentMethod
        );
        assert_eq!(
            "Kilometros Mediana".parse::<DistanceMode>().unwrap(),
            DistanceMode::Mean
        );
        assert_eq!(WeekId::Valentine.to_string(), "Valentine");
        assert_eq!(
            serde_json::to_string(&DistanceMode::Total).unwrap(),
            "\"Kilometros Totales\""
        );
    }

    #[test]
    fn test_unknown_values_rejected() {
        let err = "Kilometros Maximos".parse::<DistanceMode>().unwrap_err();
        assert!(err.is_selection_error());
        assert!(err.to_string().contains("km"));

        let err = Selection::parse(None, None, None, Some("March")).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnknownSelection { field: "week", .. }
        ));
    }

    #[test]
    fn test_parse_defaults_and_blank_week() {
        let sel = Selection::parse(Some("4"), None, Some("Kilometros Mediana"), Some("")).unwrap();
        assert_eq!(sel.day.get(), 4);
        assert_eq!(sel.pie_mode, PieMode::Passengers);
        assert_eq!(sel.distance_mode, DistanceMode::Mean);
        assert_eq!(sel.week, None);
        assert_eq!(sel.absolute_day(), None);

        let sel = Selection::parse(None, None, None, Some("January")).unwrap();
        assert_eq!(sel.absolute_day(), Some(2));
    }
}
