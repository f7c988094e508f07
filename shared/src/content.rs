//! 内容模型 - 赛事、奖励、游戏与仪表盘聚合
//!
//! Read-only projections of backend records. No client-side invariants
//! beyond field presence.

use crate::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// 赛事 (Tournaments)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: u64,
    pub title: String,
    pub game: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub prize_pool: Option<String>,
    pub max_participants: u32,
    #[serde(default)]
    pub status: TournamentStatus,
    /// Username of the creator.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    #[default]
    Registered,
    Active,
    Completed,
    Disqualified,
}

/// A tournament the current user has joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTournament {
    pub id: u64,
    pub user_id: u64,
    pub tournament_id: u64,
    #[serde(default)]
    pub status: ParticipationStatus,
    pub joined_at: DateTime<Utc>,
    pub tournament: Tournament,
}

// =========================================================
// 奖励 (Rewards)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Cost in points.
    pub points: i64,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Reward {
    pub fn affordable_by(&self, user: &User) -> bool {
        self.is_active && self.stock > 0 && user.points >= self.points
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Claimed,
    Shipped,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReward {
    pub id: u64,
    pub user_id: u64,
    pub reward_id: u64,
    #[serde(default)]
    pub status: ClaimStatus,
    pub claimed_at: DateTime<Utc>,
    pub reward: Reward,
}

// =========================================================
// 游戏 (Games)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Pending,
    Approved,
    Testing,
    Completed,
    Rejected,
}

impl GameStatus {
    pub const ALL: [GameStatus; 5] = [
        GameStatus::Pending,
        GameStatus::Approved,
        GameStatus::Testing,
        GameStatus::Completed,
        GameStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Pending => "pending",
            GameStatus::Approved => "approved",
            GameStatus::Testing => "testing",
            GameStatus::Completed => "completed",
            GameStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub title: String,
    pub developer: String,
    pub genre: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Username of the submitter.
    pub submitted_by: String,
    pub created_at: DateTime<Utc>,
}

// =========================================================
// 动态与仪表盘 (Activity & Dashboard)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Registration,
    Login,
    TournamentJoin,
    TournamentLeave,
    RewardClaim,
    PointsEarned,
    ProfileUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRef {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub tournament_id: Option<u64>,
    #[serde(default)]
    pub reward_id: Option<u64>,
    pub activity_type: ActivityType,
    pub description: String,
    #[serde(default)]
    pub points_change: i64,
    #[serde(default)]
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tournament: Option<TitleRef>,
    #[serde(default)]
    pub reward: Option<TitleRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tournaments: u64,
    pub total_rewards: u64,
    pub total_points: i64,
}

/// Aggregate returned by `GET /dashboard/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub user: User,
    #[serde(default)]
    pub tournaments: Vec<UserTournament>,
    #[serde(default)]
    pub rewards: Vec<UserReward>,
    #[serde(default)]
    pub activity: Vec<UserActivity>,
    #[serde(default)]
    pub stats: DashboardStats,
}

impl DashboardData {
    /// Empty aggregate shown when the dashboard endpoint is unreachable.
    pub fn fallback_for(user: &User) -> Self {
        Self {
            user: user.clone(),
            tournaments: Vec::new(),
            rewards: Vec::new(),
            activity: Vec::new(),
            stats: DashboardStats {
                total_points: user.points,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "id": 1,
            "username": "u",
            "email": "u@example.com",
            "points": 40,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn dashboard_stats_use_camel_case() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalTournaments": 3,
            "totalRewards": 1,
            "totalPoints": 250
        }))
        .unwrap();
        assert_eq!(stats.total_tournaments, 3);
        assert_eq!(stats.total_rewards, 1);
        assert_eq!(stats.total_points, 250);
    }

    #[test]
    fn fallback_dashboard_keeps_cached_points() {
        let data = DashboardData::fallback_for(&user());
        assert!(data.tournaments.is_empty());
        assert!(data.activity.is_empty());
        assert_eq!(data.stats.total_points, 40);
        assert_eq!(data.stats.total_tournaments, 0);
    }

    #[test]
    fn activity_types_are_snake_case() {
        let activity: UserActivity = serde_json::from_value(json!({
            "id": 9,
            "user_id": 1,
            "tournament_id": 4,
            "reward_id": null,
            "activity_type": "tournament_join",
            "description": "Joined tournament: Cup",
            "points_change": 10,
            "status": "completed",
            "created_at": "2024-01-01T00:00:00Z",
            "tournament": { "title": "Cup" },
            "reward": null
        }))
        .unwrap();
        assert_eq!(activity.activity_type, ActivityType::TournamentJoin);
        assert_eq!(activity.tournament.unwrap().title, "Cup");
    }

    #[test]
    fn game_status_parse_matches_wire_names() {
        for status in GameStatus::ALL {
            assert_eq!(GameStatus::parse(status.as_str()), Some(status));
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        assert_eq!(GameStatus::parse("archived"), None);
    }

    #[test]
    fn reward_affordability() {
        let reward: Reward = serde_json::from_value(json!({
            "id": 2,
            "title": "Headset",
            "points": 50,
            "category": "gear",
            "stock": 1,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let mut buyer = user();
        assert!(!reward.affordable_by(&buyer));
        buyer.points = 50;
        assert!(reward.affordable_by(&buyer));
    }
}
