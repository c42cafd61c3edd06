#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Job role attached to an account.
///
/// The remote API uses the role to decide which KPI views to serve; the
/// client only displays it and never branches on it for authorization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Ceo,
    Cfo,
    #[default]
    User,
}

impl Role {
    /// Parse a wire role string, `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "CEO" => Some(Self::Ceo),
            "CFO" => Some(Self::Cfo),
            "USER" => Some(Self::User),
            _ => None,
        }
    }

    /// Normalize a wire role. Unknown or missing values collapse to `User`
    /// so an unexpected server value never propagates untyped.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => Self::parse(s).unwrap_or_else(|| {
                log::warn!("normalizing unknown role {s:?} to USER");
                Self::User
            }),
            None => Self::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Cfo => "CFO",
            Self::User => "USER",
        }
    }
}

/// Canonical account snapshot.
///
/// Used both as the login/profile wire shape and as the persisted profile
/// half of the credential pair, so one serde layout covers both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

/// Body for `POST /api/auth/login`. The identifier may be a user id or an
/// email; the server resolves it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Successful login payload: bearer token plus the account snapshot.
///
/// The role arrives as a raw string and is normalized by the session
/// service boundary rather than rejected by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: Option<String>,
}

impl LoginResponse {
    /// Split into the credential token and a normalized profile.
    pub fn into_pair(self) -> (String, UserProfile) {
        let role = Role::normalize(self.role.as_deref());
        (
            self.token,
            UserProfile {
                user_id: self.user_id,
                display_name: self.display_name,
                email: self.email,
                role,
            },
        )
    }
}

/// Body for `POST /api/auth/register`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub user_id: &'a str,
    pub display_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// Body for `PUT /api/auth/profile`. Partial by design; only the display
/// name is editable today.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'a str>,
}

/// Canonical profile payload from `GET /api/auth/profile`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: Option<String>,
}

impl ProfileResponse {
    /// Normalize into the canonical snapshot shape.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            display_name: self.display_name,
            email: self.email,
            role: Role::normalize(self.role.as_deref()),
        }
    }
}

/// Error payload the API attaches to rejected auth calls.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub msg: Option<String>,
}

/// Headline numbers for the overview page, computed server-side.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub net_revenue: f64,
    pub total_users: u64,
    pub average_ticket: f64,
}
