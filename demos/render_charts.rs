// Render the dashboard charts for one selection without starting the server
//
// cargo run --example render_charts -- prim_semana_gener.csv semana_sanvalentin.csv

use taxi_charts::{render_dashboard, DistanceMode, PieMode, Result, Selection, TripDataset, WeekId};
use tracing::{debug, info, Level};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let mut paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        paths = vec![
            "prim_semana_gener.csv".to_string(),
            "semana_sanvalentin.csv".to_string(),
        ];
    }

    let dataset = TripDataset::load(&paths)?;
    info!("Loaded {} trips", dataset.len());

    for week in [WeekId::January, WeekId::Valentine] {
        let selection = Selection {
            pie_mode: PieMode::PaymentMethod,
            distance_mode: DistanceMode::Mean,
            week: Some(week),
            ..Selection::default()
        };

        let figures = render_dashboard(&dataset, &selection);

        info!("{} week, day {}:", week, selection.day.get());
        for (x, y) in figures.line.x.iter().zip(&figures.line.y) {
            if let Some(y) = y {
                debug!("  {} {:>2}: {:.2}", figures.line.x_axis.title, x, y);
            }
        }
        for (label, count) in figures.pie.labels.iter().zip(&figures.pie.values) {
            info!("  {}: {}", label.as_deref().unwrap_or("<undefined>"), count);
        }
        for (day, km) in figures.bar.x.iter().zip(&figures.bar.y) {
            match km {
                Some(km) => info!("  {:<10} {:.3}", day, km),
                None => info!("  {:<10} -", day),
            }
        }
    }

    Ok(())
}
