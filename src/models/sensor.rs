use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub date: NaiveDateTime,
    pub sensor: String,
    pub water_level: f64,
    pub nutrient_level: f64,
}

// All readings of one sensor, sorted by date
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSeries {
    pub sensor: String,
    pub readings: Vec<SensorReading>,
}
