//! User Entity Implementation
//!
//! 배송 시스템 사용자(관리자, 기사, 창고 관리자 등)의 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::contracts::{Model, UserModel};
use crate::domain::models::role::{Role, Sex};

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    pub phone: String,
    pub address: String,
    /// 사용자 역할
    pub role: Role,
    /// 성별 (선택 항목)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// uuid v4 식별자와 현재 시각으로 생성/수정 시간을 채웁니다.
    pub fn new(name: String, email: String, phone: String, address: String, role: Role) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            address,
            role,
            sex: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}

impl Model for User {
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

impl UserModel for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn role(&self) -> Role {
        self.role
    }

    fn sex(&self) -> Option<Sex> {
        self.sex
    }
}
