//! # 사용자 수정 검증 규칙
//!
//! 정적 형식 제약([`UpdateUserRequest`]의 `validator` derive)과
//! 저장소가 필요한 이메일 중복 검사를 한 번에 수행합니다.
//!
//! | 필드 | 제약 |
//! |---|---|
//! | name | 필수, 문자, 최대 128 |
//! | email | 필수, 이메일, 최대 64, 중복 불가 |
//! | phone | 필수, 영문/숫자, 최대 16 |
//! | address | 필수, 최대 512 |
//! | role | 필수, ADM/AGT/COU/CST/CSV/PKP/WKP 중 하나 |
//! | sex | 선택, M/F 중 하나 |
//!
//! 필수 항목은 공백만 있는 값도 비어 있는 것으로 봅니다.
//! 실패는 모두 [`FieldErrors`]로 모아 `AppError::ValidationError` 하나로 돌려줍니다.

use std::sync::Arc;

use log::{debug, warn};
use validator::Validate;

use crate::core::errors::{AppError, AppResult, FieldErrors};
use crate::domain::dto::users::request::UpdateUserRequest;
use crate::repositories::users::UserRepository;

/// 이메일 중복 에러 코드
pub const UNIQUE: &str = "unique";

pub struct UpdateUserRule {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserRule {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// `user_id` 사용자를 `request` 내용으로 수정해도 되는지 검사합니다.
    ///
    /// 이메일 형식이 이미 틀렸으면 중복 검사는 건너뜁니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 하나 이상의 필드 제약 위반
    /// * `RepositoryError` - 중복 검사 중 저장소 오류
    pub fn validate(&self, request: &UpdateUserRequest, user_id: &str) -> AppResult<()> {
        let mut errors = match request.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(&e),
        };

        if !errors.contains("email") && self.users.exists_by_email(&request.email, Some(user_id))? {
            errors.add("email", UNIQUE);
        }

        if errors.is_empty() {
            debug!("사용자 수정 요청 검증 통과: {}", user_id);
            return Ok(());
        }

        warn!("❌ 사용자 수정 요청 검증 실패 ({}): {}", user_id, errors);
        Err(AppError::ValidationError(errors))
    }
}
