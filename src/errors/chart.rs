use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Sensor file is empty")]
    Empty,

    #[error("Sensor file is missing column {0}")]
    MissingColumn(&'static str),

    #[error("Invalid sensor row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Drawing error: {0}")]
    Drawing(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
