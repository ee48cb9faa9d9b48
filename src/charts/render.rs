use plotters::prelude::*;
use crate::errors::chart::{ChartError, ChartResult};
use crate::models::{SalesLine, SensorReading, SensorSeries};

const CHART_SIZE: (u32, u32) = (800, 400);
const ONE_DAY: i64 = 86_400;

fn drawing<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Drawing(e.to_string())
}

pub fn water_level_chart(series: &[SensorSeries]) -> ChartResult<String> {
    line_chart("Water Level Monitoring", "Water Level", series, |r| r.water_level)
}

pub fn nutrient_level_chart(series: &[SensorSeries]) -> ChartResult<String> {
    line_chart("Nutrient Level Monitoring", "Nutrient Level", series, |r| r.nutrient_level)
}

// One coloured line per sensor over time, rendered to an SVG string
fn line_chart(
    title: &str,
    y_desc: &str,
    series: &[SensorSeries],
    value: fn(&SensorReading) -> f64,
) -> ChartResult<String> {
    let points = || series.iter().flat_map(|s| s.readings.iter());
    let timestamp = |r: &SensorReading| r.date.and_utc().timestamp();

    let (Some(x_min), Some(x_max)) = (points().map(timestamp).min(), points().map(timestamp).max()) else {
        return Err(ChartError::Empty);
    };
    let x_max = if x_max == x_min { x_min + ONE_DAY } else { x_max };

    let y_lo = points().map(value).fold(0.0_f64, f64::min);
    let y_hi = points().map(value).fold(f64::MIN, f64::max);
    let y_hi = if y_hi <= y_lo { y_lo + 1.0 } else { y_hi + (y_hi - y_lo) * 0.1 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
            .map_err(drawing)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc(y_desc)
            .x_labels(6)
            .x_label_formatter(&|ts| format_day(*ts))
            .draw()
            .map_err(drawing)?;

        for (idx, s) in series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            chart
                .draw_series(LineSeries::new(
                    s.readings.iter().map(|r| (timestamp(r), value(r))),
                    color.stroke_width(2),
                ))
                .map_err(drawing)?
                .label(s.sensor.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(drawing)?;

        root.present().map_err(drawing)?;
    }
    Ok(svg)
}

fn format_day(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Revenue per service as a bar chart.
pub fn sales_bar_chart(lines: &[SalesLine]) -> ChartResult<String> {
    if lines.is_empty() {
        return Err(ChartError::Empty);
    }
    let count = lines.len() as u32;
    let top = lines.iter().map(|l| l.revenue).max().unwrap_or(0).max(1);
    let top = top + top / 10;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Sales & Licensing", ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..count).into_segmented(), 0u64..top)
            .map_err(drawing)?;

        let service_name = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => lines
                .get(*i as usize)
                .map(|l| l.service.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Revenue (RM)")
            .x_label_formatter(&service_name)
            .draw()
            .map_err(drawing)?;

        chart
            .draw_series(lines.iter().enumerate().map(|(i, line)| {
                let i = i as u32;
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), line.revenue)],
                    BLUE.mix(0.6).filled(),
                );
                bar.set_margin(0, 0, 10, 10);
                bar
            }))
            .map_err(drawing)?;

        root.present().map_err(drawing)?;
    }
    Ok(svg)
}
