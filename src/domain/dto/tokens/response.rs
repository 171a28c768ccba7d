use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::errors::TransformResult;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::contracts::TokenModel;
use crate::domain::models::role::Role;
use crate::transformer::response::{AttributeMap, AttributeReader, ResponseFactory};

/// 토큰 응답을 만들 때 트랜스포머가 함께 넘기는 소유자 정보
#[derive(Debug, Clone, PartialEq)]
pub struct TokenOwner {
    pub user_id: String,
    pub role: Role,
}

/// 인증 토큰 응답 DTO
///
/// ```json
/// {
///   "id": "t1",
///   "created_at": "2023-01-01T00:00:00Z",
///   "updated_at": "2023-06-01T00:00:00Z",
///   "token": "abc123",
///   "expired_at": "2024-01-01T00:00:00Z",
///   "user": { "id": "u1", "name": "Alice", ... }
/// }
/// ```
///
/// 원시 모델에서 만료 시각을, 추가 파라미터에서 소유자 정보를 복사해 둡니다.
/// 둘 다 와이어에는 나가지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenResponse {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub token: String,
    pub expired_at: String,
    pub user: UserResponse,

    #[serde(skip)]
    expires: DateTime<Utc>,
    #[serde(skip)]
    owner: TokenOwner,
}

impl TokenResponse {
    pub fn is_expired_at(&self, instant: DateTime<Utc>) -> bool {
        self.expires <= instant
    }

    pub fn owner(&self) -> &TokenOwner {
        &self.owner
    }
}

impl ResponseFactory for TokenResponse {
    type Model = dyn TokenModel;
    type Extra = TokenOwner;
    const NAME: &'static str = "token_response";

    fn required_attributes() -> &'static [&'static str] {
        &["id", "created_at", "updated_at", "token", "expired_at", "user"]
    }

    fn build(attributes: AttributeMap, model: &dyn TokenModel, owner: TokenOwner) -> TransformResult<Self> {
        let mut reader = AttributeReader::new(Self::NAME, attributes);

        let response = Self {
            id: reader.string("id")?,
            created_at: reader.string("created_at")?,
            updated_at: reader.string("updated_at")?,
            token: reader.string("token")?,
            expired_at: reader.string("expired_at")?,
            user: reader.nested("user")?,
            expires: model.expired_at(),
            owner,
        };
        reader.finish()?;

        Ok(response)
    }
}
