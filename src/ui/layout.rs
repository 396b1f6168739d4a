// Static dashboard layout: panels, controls and chart placeholders

use serde::Serialize;

use crate::core::constants::WEEKDAY_NAMES;
use crate::core::selection::{DistanceMode, PieMode, WeekId};

// Control ids double as the query parameter names of the chart endpoint.
pub const DAY_SELECTOR: &str = "day";
pub const PAS_PAY_SELECTOR: &str = "pas_pay";
pub const KM_SELECTOR: &str = "km";
pub const WEEK_SWITCH: &str = "week";

pub const LINE_CHART_ID: &str = "line_chart";
pub const PIE_CHART_ID: &str = "pie_chart";
pub const BAR_CHART_ID: &str = "bar_chart";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlOption {
    pub label: String,
    pub value: String,
}

impl ControlOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<ControlOption>,
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub heading: &'static str,
    pub dropdown: Dropdown,
    pub chart_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioGroup {
    pub id: &'static str,
    pub options: Vec<ControlOption>,
    pub default: String,
}

/// Whole-page layout. Every control in it feeds the same single chart update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub heading: &'static str,
    pub panels: Vec<Panel>,
    pub week_switch: RadioGroup,
}

impl DashboardLayout {
    pub fn new() -> Self {
        let days = WEEKDAY_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| ControlOption::new(*name, i.to_string()))
            .collect();

        let pie_modes = [PieMode::Passengers, PieMode::PaymentMethod]
            .iter()
            .map(|m| ControlOption::new(m.as_str(), m.as_str()))
            .collect();

        let km_modes = [DistanceMode::Total, DistanceMode::Mean]
            .iter()
            .map(|m| ControlOption::new(m.as_str(), m.as_str()))
            .collect();

        Self {
            title: "Dashboard",
            heading: "Taxis de Nueva York",
            panels: vec![
                Panel {
                    heading: "Dinero Pagado por Hora",
                    dropdown: Dropdown {
                        id: DAY_SELECTOR,
                        options: days,
                        default: "0".to_string(),
                    },
                    chart_id: LINE_CHART_ID,
                },
                Panel {
                    heading: "Numero de Pasajeros / Metodos de pago",
                    dropdown: Dropdown {
                        id: PAS_PAY_SELECTOR,
                        options: pie_modes,
                        default: PieMode::default().to_string(),
                    },
                    chart_id: PIE_CHART_ID,
                },
                Panel {
                    heading: "Kilometros Totales / Mediana por Dia",
                    dropdown: Dropdown {
                        id: KM_SELECTOR,
                        options: km_modes,
                        default: DistanceMode::default().to_string(),
                    },
                    chart_id: BAR_CHART_ID,
                },
            ],
            week_switch: RadioGroup {
                id: WEEK_SWITCH,
                options: vec![
                    ControlOption::new("Primera Semana de Enero", WeekId::January.as_str()),
                    ControlOption::new("Semana de San Valentin", WeekId::Valentine.as_str()),
                ],
                default: WeekId::January.to_string(),
            },
        }
    }

    /// Every control id on the page, in display order.
    pub fn control_ids(&self) -> Vec<&'static str> {
        self.panels
            .iter()
            .map(|p| p.dropdown.id)
            .chain(std::iter::once(self.week_switch.id))
            .collect()
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::Selection;

    #[test]
    fn test_layout_defaults_parse() {
        let layout = DashboardLayout::new();
        assert_eq!(layout.panels.len(), 3);

        let sel = Selection::parse(
            Some(layout.panels[0].dropdown.default.as_str()),
            Some(layout.panels[1].dropdown.default.as_str()),
            Some(layout.panels[2].dropdown.default.as_str()),
            Some(layout.week_switch.default.as_str()),
        )
        .unwrap();
        assert_eq!(sel, Selection::default());
    }

    #[test]
    fn test_day_options() {
        let layout = DashboardLayout::new();
        let days = &layout.panels[0].dropdown.options;
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], ControlOption::new("Lunes", "0"));
        assert_eq!(days[6], ControlOption::new("Domingo", "6"));
    }

    #[test]
    fn test_every_option_is_a_valid_selection() {
        let layout = DashboardLayout::new();
        for opt in &layout.panels[1].dropdown.options {
            assert!(Selection::parse(None, Some(opt.value.as_str()), None, None).is_ok());
        }
        for opt in &layout.panels[2].dropdown.options {
            assert!(Selection::parse(None, None, Some(opt.value.as_str()), None).is_ok());
        }
        for opt in &layout.week_switch.options {
            assert!(Selection::parse(None, None, None, Some(opt.value.as_str())).is_ok());
        }
        assert_eq!(layout.control_ids(), vec!["day", "pas_pay", "km", "week"]);
    }
}
