use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::services::TableRecord;

// Role column values. Rows typed by hand may carry anything; those load as
// `Other` and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    FarmerClient,
    MaintenanceWorker,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::FarmerClient => "Farmer/Client",
            Role::MaintenanceWorker => "Maintenance Worker",
            Role::Other(s) => s,
        }
    }

    /// Roles offered on the public registration form. Admin accounts are
    /// provisioned by editing the users file.
    pub fn self_registrable(&self) -> bool {
        matches!(self, Role::FarmerClient | Role::MaintenanceWorker)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Admin" => Role::Admin,
            "Farmer/Client" => Role::FarmerClient,
            "Maintenance Worker" => Role::MaintenanceWorker,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Strict parse for form input; only the three known roles are accepted
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Role::from(s.to_string()) {
            Role::Other(other) => Err(format!("unknown role '{}'", other)),
            known => Ok(known),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,  // plaintext, as stored
    #[serde(rename = "Role")]
    pub role: Role,
}

impl TableRecord for UserRecord {
    const COLUMNS: &'static [&'static str] = &["Username", "Password", "Role"];
}

// What the session remembers after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: Role,
}
