use serde::{Deserialize, Serialize};

use crate::core::errors::TransformResult;
use crate::domain::models::contracts::UserModel;
use crate::domain::models::role::Role;
use crate::transformer::response::{AttributeMap, AttributeReader, ResponseFactory};

/// 사용자 응답 DTO
///
/// 필드 순서가 곧 와이어 스키마입니다. 공통 속성(`id`, `created_at`, `updated_at`)이 먼저 옵니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,

    /// 역할 코드 (`COU`, `WKP` 등)
    pub role: String,

    /// 성별 코드, 없으면 `null`
    pub sex: Option<String>,
}

impl UserResponse {
    /// 역할 코드를 도메인 역할로 되돌립니다.
    pub fn role(&self) -> Option<Role> {
        Role::from_code(&self.role)
    }
}

impl ResponseFactory for UserResponse {
    type Model = dyn UserModel;
    type Extra = ();
    const NAME: &'static str = "user_response";

    fn required_attributes() -> &'static [&'static str] {
        &[
            "id",
            "created_at",
            "updated_at",
            "name",
            "email",
            "phone",
            "address",
            "role",
            "sex",
        ]
    }

    fn build(attributes: AttributeMap, _model: &dyn UserModel, _extra: ()) -> TransformResult<Self> {
        let mut reader = AttributeReader::new(Self::NAME, attributes);

        let response = Self {
            id: reader.string("id")?,
            created_at: reader.string("created_at")?,
            updated_at: reader.string("updated_at")?,
            name: reader.string("name")?,
            email: reader.string("email")?,
            phone: reader.string("phone")?,
            address: reader.string("address")?,
            role: reader.string("role")?,
            sex: reader.optional_string("sex")?,
        };
        reader.finish()?;

        Ok(response)
    }
}
