use approx::assert_abs_diff_eq;
use taxi_charts::core::aggregate::{day_scope, week_scope};
use taxi_charts::{
    render_dashboard, DayIndex, DistanceMode, PieMode, Selection, TripDataset, WeekId,
};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn load_both() -> TripDataset {
    TripDataset::load(&[fixture("january_week.csv"), fixture("valentine_week.csv")])
        .expect("Failed to load fixtures")
}

fn select(week: WeekId, day: u8) -> Selection {
    Selection {
        day: DayIndex::new(day).unwrap(),
        week: Some(week),
        ..Selection::default()
    }
}

#[test]
fn test_load_merges_in_file_order() {
    let ds = load_both();
    assert_eq!(ds.len(), 9);
    assert_eq!(ds.sources()[0].rows, 6);
    assert_eq!(ds.sources()[1].rows, 3);
    assert_eq!(ds.records()[0].total_amount, 20.1);
    assert_eq!(ds.records()[8].total_amount, 57.7);
    assert_eq!(ds.records()[3].passenger_count, None);
}

#[test]
fn test_scopes_nest_for_every_week_and_day() {
    let ds = load_both();
    for week in [WeekId::January, WeekId::Valentine] {
        for day in 0..7 {
            let sel = select(week, day);
            let week_rows = week_scope(&ds, sel.week);
            let day_rows = day_scope(&week_rows, sel.absolute_day());
            assert!(day_rows.len() <= week_rows.len());
            assert!(week_rows.len() <= ds.len());
            assert!(day_rows.iter().all(|r| week_rows.contains(r)));
            assert!(day_rows
                .iter()
                .all(|r| r.day_of_month() == week.absolute_day(sel.day)));
        }
    }
}

#[test]
fn test_january_first_day() {
    let figs = render_dashboard(&load_both(), &select(WeekId::January, 0));

    assert_eq!(figs.line.x, (1..=24).collect::<Vec<u32>>());
    assert_abs_diff_eq!(figs.line.y[0].unwrap(), 21.05, epsilon = 1e-9);
    assert_abs_diff_eq!(figs.line.y[8].unwrap(), 15.3, epsilon = 1e-9);
    assert_eq!(figs.line.y.iter().filter(|y| y.is_some()).count(), 2);

    assert_eq!(figs.pie.title, "Distribucion de pasajeros");
    assert_eq!(
        figs.pie.labels,
        vec![Some("1".to_string()), Some("2".to_string()), None, Some("3".to_string())]
    );
    assert_eq!(figs.pie.values, vec![3, 1, 1, 1]);

    assert_eq!(figs.bar.x[0], "Lunes");
    assert_abs_diff_eq!(figs.bar.y[0].unwrap(), 7.5, epsilon = 1e-9);
    assert_abs_diff_eq!(figs.bar.y[1].unwrap(), 5.2, epsilon = 1e-9);
    assert_abs_diff_eq!(figs.bar.y[2].unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(figs.bar.y[6].unwrap(), 4.4, epsilon = 1e-9);
    assert_eq!(figs.bar.y_axis.range, Some([900_000.0, 1_250_000.0]));
}

#[test]
fn test_january_last_day_is_the_eighth() {
    let figs = render_dashboard(&load_both(), &select(WeekId::January, 6));
    assert_abs_diff_eq!(figs.line.y[23].unwrap(), 24.1, epsilon = 1e-9);
    assert_eq!(figs.line.y.iter().filter(|y| y.is_some()).count(), 1);
}

#[test]
fn test_payment_methods() {
    let sel = Selection {
        pie_mode: PieMode::PaymentMethod,
        ..select(WeekId::January, 0)
    };
    let pie = render_dashboard(&load_both(), &sel).pie;

    let labels: Vec<Option<&str>> = pie.labels.iter().map(|l| l.as_deref()).collect();
    assert_eq!(
        labels,
        vec![
            Some("Tarjeta de Credito"),
            Some("Efectivo"),
            None,
            Some("Gratuito"),
            Some("Disputa"),
        ]
    );
    assert_eq!(pie.values, vec![2, 1, 1, 1, 1]);
}

#[test]
fn test_valentine_mean_distance() {
    let sel = Selection {
        distance_mode: DistanceMode::Mean,
        ..select(WeekId::Valentine, 0)
    };
    let figs = render_dashboard(&load_both(), &sel);

    assert_abs_diff_eq!(figs.line.y[7].unwrap(), 19.25, epsilon = 1e-9);
    assert_eq!(figs.bar.y_axis.range, Some([2.0, 3.5]));
    assert_eq!(figs.bar.y[0], None);
    assert_abs_diff_eq!(figs.bar.y[1].unwrap(), 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(figs.bar.y[2].unwrap(), 2.5, epsilon = 1e-9);
}

#[test]
fn test_valentine_on_january_only_data() {
    let ds = TripDataset::load(&[fixture("january_week.csv")]).unwrap();
    let figs = render_dashboard(&ds, &select(WeekId::Valentine, 3));

    assert_eq!(figs.line.y.len(), 24);
    assert!(figs.line.y.iter().all(Option::is_none));
    assert!(figs.pie.labels.is_empty());
    assert_eq!(figs.bar.y, vec![Some(0.0); 7]);
    assert!(serde_json::to_string(&figs).is_ok());
}
