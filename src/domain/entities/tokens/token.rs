//! Token Entity Implementation

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::users::User;
use crate::domain::models::contracts::{Model, TokenModel, UserModel};

/// 인증 토큰 엔티티
///
/// 소유 사용자는 토큰을 읽을 때 함께 로드되어 `Arc`로 공유됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    /// 토큰 문자열
    pub token: String,
    /// 만료 시각
    pub expired_at: DateTime<Utc>,
    /// 토큰 소유자
    pub user: Arc<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Token {
    /// 사용자에게 `ttl` 동안 유효한 토큰을 발급합니다.
    pub fn issue(user: Arc<User>, token: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            token,
            expired_at: now + ttl,
            user,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Model for Token {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl TokenModel for Token {
    fn token(&self) -> &str {
        &self.token
    }

    fn expired_at(&self) -> DateTime<Utc> {
        self.expired_at
    }

    fn user(&self) -> Arc<dyn UserModel> {
        self.user.clone()
    }
}
