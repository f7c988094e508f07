use crate::{
    AuthResponse, DashboardData, Game, GameStatus, LoginCredentials, MessageResponse,
    RegisterCredentials, Reward, Tournament, UserEnvelope, UserReward, UserTournament,
};
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the configured API base and keep the backend's
/// trailing slash.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request value itself is sent as the JSON body.
    const HAS_BODY: bool = false;

    /// The URL path, with any identifiers filled in.
    fn path(&self) -> String;
}

macro_rules! static_path {
    ($ty:ty, $method:expr, $path:literal, $resp:ty) => {
        impl ApiRequest for $ty {
            type Response = $resp;
            const METHOD: HttpMethod = $method;

            fn path(&self) -> String {
                $path.to_string()
            }
        }
    };
}

// =========================================================
// Auth
// =========================================================

/// Register a new account. The backend wants the password twice.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&RegisterCredentials> for RegisterRequest {
    fn from(creds: &RegisterCredentials) -> Self {
        Self {
            username: creds.name.clone(),
            email: creds.email.clone(),
            password: creds.password.clone(),
            password2: creds.password.clone(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;

    fn path(&self) -> String {
        "/auth/register/".to_string()
    }
}

/// Log in. The login form's email is sent as the backend username.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<&LoginCredentials> for LoginRequest {
    fn from(creds: &LoginCredentials) -> Self {
        Self {
            username: creds.email.clone(),
            password: creds.password.clone(),
        }
    }
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;

    fn path(&self) -> String {
        "/auth/login/".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest;
static_path!(LogoutRequest, HttpMethod::Post, "/auth/logout/", MessageResponse);

/// Probe the session cookie; 401 when anonymous.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserRequest;
static_path!(CurrentUserRequest, HttpMethod::Get, "/auth/user/", UserEnvelope);

// =========================================================
// Tournaments
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ListTournamentsRequest;
static_path!(ListTournamentsRequest, HttpMethod::Get, "/tournaments/", Vec<Tournament>);

#[derive(Debug, Clone, Serialize)]
pub struct GetTournamentRequest {
    #[serde(skip)]
    pub id: u64,
}

impl ApiRequest for GetTournamentRequest {
    type Response = Tournament;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/tournaments/{}/", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTournamentRequest {
    pub title: String,
    pub game: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

impl ApiRequest for CreateTournamentRequest {
    type Response = Tournament;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;

    fn path(&self) -> String {
        "/tournaments/".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JoinTournamentRequest {
    #[serde(skip)]
    pub id: u64,
}

impl ApiRequest for JoinTournamentRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/tournaments/{}/join/", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveTournamentRequest {
    #[serde(skip)]
    pub id: u64,
}

impl ApiRequest for LeaveTournamentRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/tournaments/{}/leave/", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserTournamentsRequest;
static_path!(
    UserTournamentsRequest,
    HttpMethod::Get,
    "/tournaments/user/",
    Vec<UserTournament>
);

// =========================================================
// Rewards
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ListRewardsRequest;
static_path!(ListRewardsRequest, HttpMethod::Get, "/rewards/", Vec<Reward>);

#[derive(Debug, Clone, Serialize)]
pub struct ClaimRewardRequest {
    #[serde(rename = "rewardId")]
    pub reward_id: u64,
}

impl ApiRequest for ClaimRewardRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;

    fn path(&self) -> String {
        "/rewards/claim/".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRewardsRequest;
static_path!(UserRewardsRequest, HttpMethod::Get, "/rewards/user/", Vec<UserReward>);

// =========================================================
// Games
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ListGamesRequest;
static_path!(ListGamesRequest, HttpMethod::Get, "/games/", Vec<Game>);

#[derive(Debug, Clone, Serialize)]
pub struct SubmitGameRequest {
    pub title: String,
    pub developer: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ApiRequest for SubmitGameRequest {
    type Response = Game;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = true;

    fn path(&self) -> String {
        "/games/".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateGameStatusRequest {
    #[serde(skip)]
    pub id: u64,
    pub status: GameStatus,
}

impl ApiRequest for UpdateGameStatusRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Put;
    const HAS_BODY: bool = true;

    fn path(&self) -> String {
        format!("/games/{}/status/", self.id)
    }
}

// =========================================================
// Dashboard
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct DashboardRequest;
static_path!(DashboardRequest, HttpMethod::Get, "/dashboard/", DashboardData);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_sends_email_as_username() {
        let req = LoginRequest::from(&LoginCredentials::new("user@example.com", "pw"));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "username": "user@example.com", "password": "pw" })
        );
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert_eq!(req.path(), "/auth/login/");
    }

    #[test]
    fn register_repeats_password() {
        let creds = RegisterCredentials {
            name: "sara".into(),
            email: "sara@example.com".into(),
            password: "secret1".into(),
        };
        let body = serde_json::to_value(RegisterRequest::from(&creds)).unwrap();
        assert_eq!(body["username"], "sara");
        assert_eq!(body["password2"], "secret1");
        assert_eq!(body["first_name"], "");
    }

    #[test]
    fn identifier_paths() {
        assert_eq!(GetTournamentRequest { id: 3 }.path(), "/tournaments/3/");
        assert_eq!(JoinTournamentRequest { id: 3 }.path(), "/tournaments/3/join/");
        assert_eq!(LeaveTournamentRequest { id: 3 }.path(), "/tournaments/3/leave/");
        assert_eq!(LeaveTournamentRequest::METHOD, HttpMethod::Delete);
        let update = UpdateGameStatusRequest {
            id: 11,
            status: GameStatus::Approved,
        };
        assert_eq!(update.path(), "/games/11/status/");
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "status": "approved" }));
    }

    #[test]
    fn claim_body_uses_camel_case_id() {
        let body = serde_json::to_value(ClaimRewardRequest { reward_id: 5 }).unwrap();
        assert_eq!(body, json!({ "rewardId": 5 }));
    }

    #[test]
    fn bodyless_requests() {
        assert!(!JoinTournamentRequest::HAS_BODY);
        assert!(!LogoutRequest::HAS_BODY);
        assert!(!DashboardRequest::HAS_BODY);
        assert!(SubmitGameRequest::HAS_BODY);
    }

    #[test]
    fn optional_create_fields_are_omitted() {
        let req = CreateTournamentRequest {
            title: "Cup".into(),
            game: "Chess".into(),
            description: String::new(),
            start_date: "2024-05-01T00:00:00Z".parse().unwrap(),
            end_date: "2024-05-02T00:00:00Z".parse().unwrap(),
            prize_pool: None,
            max_participants: None,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert!(body.get("prize_pool").is_none());
        assert!(body.get("max_participants").is_none());
        assert_eq!(body["start_date"], "2024-05-01T00:00:00Z");
    }
}
