use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct AcceptJobForm {
    pub task: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub session: String,
}

// ?error=... on the login page
#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub error: Option<String>,
    pub message: Option<String>,
}
