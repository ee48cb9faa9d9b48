mod user;
mod forms;
mod task;
mod dashboard;
mod sensor;

pub use user::{Role, SessionUser, UserRecord};
pub use forms::{AcceptJobForm, BookingForm, LoginForm, PageQuery, RegisterForm};
pub use task::{TaskRecord, TaskStatus};
pub use dashboard::{Kpi, SalesLine, TrainingSession};
pub use sensor::{SensorReading, SensorSeries};
