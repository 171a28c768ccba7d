//! # 사용자 리포지토리
//!
//! 검증 규칙이 의존하는 사용자 조회 계약과, 테스트와 바이너리에서 쓰는 메모리 구현입니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

/// 사용자 데이터 조회 계약
///
/// 영속 저장소 구현은 이 크레이트 밖에 있습니다.
pub trait UserRepository: Send + Sync {
    /// `except_id` 사용자를 제외하고 같은 이메일이 있는지 확인합니다.
    fn exists_by_email(&self, email: &str, except_id: Option<&str>) -> AppResult<bool>;
}

/// 메모리 기반 사용자 리포지토리
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, Arc<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 저장하거나 같은 id의 사용자를 교체합니다.
    pub fn save(&self, user: User) -> AppResult<Arc<User>> {
        let user = Arc::new(user);
        let mut users = self
            .users
            .write()
            .map_err(|e| AppError::RepositoryError(e.to_string()))?;

        debug!("사용자 저장: {}", user.id);
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

impl UserRepository for InMemoryUserRepository {
    fn exists_by_email(&self, email: &str, except_id: Option<&str>) -> AppResult<bool> {
        let users = self
            .users
            .read()
            .map_err(|e| AppError::RepositoryError(e.to_string()))?;

        Ok(users
            .values()
            .any(|user| user.email.eq_ignore_ascii_case(email) && Some(user.id.as_str()) != except_id))
    }
}
