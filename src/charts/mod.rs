mod sensor_data;
mod render;

pub use sensor_data::{group_by_sensor, parse_readings};
pub use render::{nutrient_level_chart, sales_bar_chart, water_level_chart};
