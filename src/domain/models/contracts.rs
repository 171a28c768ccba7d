//! # Model Contracts
//!
//! 트랜스포머가 의존하는 읽기 전용 모델 계약입니다.
//! 트랜스포머는 구체 저장소 타입을 알지 못하고 이 trait들만 봅니다.
//!
//! 각 계약은 [`Transformable`]을 구현하여 DIRECT 디스크립터가 쓸 수 있는
//! 필드 이름 → getter 표를 명시적으로 제공합니다.
//!
//! ```text
//! Model (id, created_at, updated_at)
//! ├── UserModel  (name, email, phone, address, role, sex)
//! └── TokenModel (token, expired_at, user)
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::models::role::{Role, Sex};
use crate::transformer::attribute::{AccessorTable, Transformable};
use crate::transformer::caster::RawValue;

/// 모든 엔티티 계약의 공통 부분
///
/// 트랜스포머 인스턴스가 스레드 간에 공유되므로 계약 객체도 `Send + Sync`여야 합니다.
pub trait Model: Send + Sync {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// 사용자 계약
pub trait UserModel: Model {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn phone(&self) -> &str;
    fn address(&self) -> &str;
    fn role(&self) -> Role;
    fn sex(&self) -> Option<Sex>;
}

/// 인증 토큰 계약
///
/// 토큰 소유자는 변환 전에 이미 로드되어 있어야 합니다.
pub trait TokenModel: Model {
    fn token(&self) -> &str;
    fn expired_at(&self) -> DateTime<Utc>;
    fn user(&self) -> Arc<dyn UserModel>;
}

impl Transformable for dyn UserModel {
    fn accessors() -> AccessorTable<Self> {
        AccessorTable::<Self>::for_model()
            .with("name", |model| RawValue::from(model.name()))
            .with("email", |model| RawValue::from(model.email()))
            .with("phone", |model| RawValue::from(model.phone()))
            .with("address", |model| RawValue::from(model.address()))
            .with("role", |model| RawValue::from(model.role().code()))
            .with("sex", |model| RawValue::from(model.sex().map(|sex| sex.code())))
    }
}

impl Transformable for dyn TokenModel {
    fn accessors() -> AccessorTable<Self> {
        AccessorTable::<Self>::for_model()
            .with("token", |model| RawValue::from(model.token()))
            .with("expired_at", |model| RawValue::from(model.expired_at()))
    }
}
