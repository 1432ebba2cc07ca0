use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{NewTarget, NewUser, Target, User};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Outward view of a [`User`]. Has no field for the password.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TargetDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub description: String,
}

impl From<Target> for TargetDto {
    fn from(target: Target) -> Self {
        Self {
            id: target.id,
            kind: target.kind,
            value: target.value,
            description: target.description,
        }
    }
}

// Absent and `null` fields decode as empty strings; only undecodable bodies
// are rejected.

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SignupRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

impl From<SignupRequest> for NewUser {
    fn from(req: SignupRequest) -> Self {
        Self::new(req.username, req.email, req.password)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateTargetRequest {
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub value: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

impl From<CreateTargetRequest> for NewTarget {
    fn from(req: CreateTargetRequest) -> Self {
        Self::new(req.kind, req.value, req.description)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub users: usize,
    pub targets: usize,
}
