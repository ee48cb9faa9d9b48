use chrono::{NaiveDate, NaiveDateTime};
use crate::errors::chart::{ChartError, ChartResult};
use crate::models::{SensorReading, SensorSeries};

const DATE: &str = "Date";
const SENSOR: &str = "Sensor";
const WATER_LEVEL: &str = "Water_Level";
const NUTRIENT_LEVEL: &str = "Nutrient_Level";

// Parse an uploaded sensor CSV. Extra columns are ignored, the four named
// ones must be present.
pub fn parse_readings(data: &[u8]) -> ChartResult<Vec<SensorReading>> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(ChartError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(ChartError::MissingColumn(name))
    };
    let date_idx = column(DATE)?;
    let sensor_idx = column(SENSOR)?;
    let water_idx = column(WATER_LEVEL)?;
    let nutrient_idx = column(NUTRIENT_LEVEL)?;

    let mut readings = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        readings.push(SensorReading {
            date: parse_date(field(date_idx)).ok_or_else(|| ChartError::InvalidRow {
                row,
                message: format!("unrecognised date '{}'", field(date_idx)),
            })?,
            sensor: field(sensor_idx).to_string(),
            water_level: parse_level(field(water_idx), WATER_LEVEL, row)?,
            nutrient_level: parse_level(field(nutrient_idx), NUTRIENT_LEVEL, row)?,
        });
    }

    if readings.is_empty() {
        return Err(ChartError::Empty);
    }
    tracing::debug!("Parsed {} sensor readings", readings.len());
    Ok(readings)
}

// Dates come either bare or with a time of day
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn parse_level(value: &str, column: &str, row: usize) -> ChartResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ChartError::InvalidRow {
            row,
            message: format!("{} '{}' is not a number", column, value),
        })
}

/// One series per sensor, in the order sensors first appear, each sorted by date.
pub fn group_by_sensor(readings: &[SensorReading]) -> Vec<SensorSeries> {
    let mut series: Vec<SensorSeries> = Vec::new();
    for reading in readings {
        match series.iter_mut().find(|s| s.sensor == reading.sensor) {
            Some(s) => s.readings.push(reading.clone()),
            None => series.push(SensorSeries {
                sensor: reading.sensor.clone(),
                readings: vec![reading.clone()],
            }),
        }
    }
    for s in &mut series {
        s.readings.sort_by_key(|r| r.date);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,Sensor,Water_Level,Nutrient_Level,Notes
2024-10-02,S1,40.5,12.0,
2024-10-01,S1,42,11.5,ok
2024-10-01,S2,38.25,13,
2024-10-02 06:30:00,S2,37,12.75,after rain
";

    #[test]
    fn test_parse_readings() {
        let readings = parse_readings(SAMPLE.as_bytes()).unwrap();

        assert_eq!(readings.len(), 4);
        assert_eq!(readings[0].sensor, "S1");
        assert_eq!(readings[0].water_level, 40.5);
        assert_eq!(readings[2].nutrient_level, 13.0);
        assert_eq!(
            readings[3].date,
            NaiveDate::from_ymd_opt(2024, 10, 2).unwrap().and_hms_opt(6, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_group_by_sensor_sorts_each_series() {
        let readings = parse_readings(SAMPLE.as_bytes()).unwrap();
        let series = group_by_sensor(&readings);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].sensor, "S1");
        assert_eq!(series[1].sensor, "S2");
        assert_eq!(series[0].readings[0].water_level, 42.0);
        assert_eq!(series[0].readings[1].water_level, 40.5);
        assert!(series[1].readings[0].date < series[1].readings[1].date);
    }

    #[test]
    fn test_missing_column() {
        let err = parse_readings(b"Date,Sensor,Water_Level\n2024-10-01,S1,40\n").unwrap_err();
        assert!(matches!(err, ChartError::MissingColumn("Nutrient_Level")));
    }

    #[test]
    fn test_bad_values() {
        let err = parse_readings(b"Date,Sensor,Water_Level,Nutrient_Level\nyesterday,S1,1,2\n").unwrap_err();
        assert!(matches!(err, ChartError::InvalidRow { row: 1, .. }));

        let err = parse_readings(b"Date,Sensor,Water_Level,Nutrient_Level\n2024-10-01,S1,1,2\n2024-10-02,S1,high,2\n").unwrap_err();
        assert!(matches!(err, ChartError::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn test_empty_upload() {
        assert!(matches!(parse_readings(b""), Err(ChartError::Empty)));
        assert!(matches!(parse_readings(b"  \n"), Err(ChartError::Empty)));
        assert!(matches!(
            parse_readings(b"Date,Sensor,Water_Level,Nutrient_Level\n"),
            Err(ChartError::Empty)
        ));
    }
}
