use axum::{
    extract::{Multipart, multipart::Field},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use crate::charts;
use crate::errors::{AppError, AppResult};
use crate::models::Role;
use super::render::{html_table, load_template};
use super::session::require_role;

pub async fn upload_sensor_data(
    session: Session,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let user = require_role(&session, Role::FarmerClient).await?;
    tracing::info!("Sensor upload from {}", user.username);

    let mut data = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to get next field from multipart form: {}", e);
        AppError::Upload(format!("Failed to process form field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "sensor_file" => data = Some(read_csv_field(field).await?),
            field_name => tracing::warn!("Unexpected form field: {}", field_name),
        }
    }
    let data = data.ok_or_else(|| AppError::Upload("No sensor file uploaded".into()))?;

    let readings = charts::parse_readings(&data)?;
    let series = charts::group_by_sensor(&readings);
    let water_chart = charts::water_level_chart(&series)?;
    let nutrient_chart = charts::nutrient_level_chart(&series)?;

    let table = html_table(
        &["Date", "Sensor", "Water_Level", "Nutrient_Level"],
        readings.iter().map(|r| {
            vec![
                r.date.format("%Y-%m-%d %H:%M:%S").to_string(),
                r.sensor.clone(),
                r.water_level.to_string(),
                r.nutrient_level.to_string(),
            ]
        }),
    );

    let html = load_template("sensors.html")?
        .replace("{{count}}", &readings.len().to_string())
        .replace("{{sensors}}", &series.len().to_string())
        .replace("{{table}}", &table)
        .replace("{{water_chart}}", &water_chart)
        .replace("{{nutrient_chart}}", &nutrient_chart);

    tracing::debug!("Charted {} readings from {} sensors", readings.len(), series.len());
    Ok(Html(html).into_response())
}

// Only .csv files are accepted
async fn read_csv_field(field: Field<'_>) -> AppResult<Vec<u8>> {
    if let Some(filename) = field.file_name() {
        if !filename.to_ascii_lowercase().ends_with(".csv") {
            return Err(AppError::Upload(format!("{} is not a CSV file", filename)));
        }
    }

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to read sensor file: {}", e)))?;
    Ok(bytes.to_vec())
}
