//! 사용자 정보 수정 요청 DTO
//!
//! 형식 제약은 `validator` derive로 검사하고, 이메일 중복 여부는
//! [`UpdateUserRule`](crate::services::users::UpdateUserRule)이 저장소를 통해 확인합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::role::{Role, Sex};

/// 사용자 정보 수정 요청
///
/// 필수 항목은 공백을 제거한 값이 비어 있으면 `required` 코드로 실패하며,
/// 이 경우 같은 필드의 형식 검사는 건너뜁니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 이름 (문자와 공백만, 최대 128자)
    #[validate(length(max = 128))]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// 이메일 (최대 64자, 다른 사용자와 중복 불가)
    #[validate(length(max = 64))]
    #[validate(email)]
    #[validate(custom(function = "validate_required"))]
    pub email: String,

    /// 연락처 (영문/숫자만, 최대 16자)
    #[validate(length(max = 16))]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(max = 512))]
    #[validate(custom(function = "validate_required"))]
    pub address: String,

    /// 역할 코드
    #[validate(custom(function = "validate_role"))]
    pub role: String,

    /// 성별 코드 (선택)
    #[serde(default)]
    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

impl UpdateUserRequest {
    /// 검증을 통과한 요청의 역할
    pub fn parsed_role(&self) -> Option<Role> {
        Role::from_code(&self.role)
    }

    pub fn parsed_sex(&self) -> Option<Sex> {
        self.sex.as_deref().and_then(Sex::from_code)
    }
}

/// 공백만 있는 값도 비어 있는 것으로 봅니다.
fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("필수 항목입니다".into()));
    }
    Ok(())
}

/// 필수, 문자와 공백만 허용
fn validate_name(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::new("alpha").with_message("이름은 문자만 사용할 수 있습니다".into()));
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new("alpha_num")
            .with_message("연락처는 영문과 숫자만 사용할 수 있습니다".into()));
    }
    Ok(())
}

fn validate_role(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if Role::from_code(value).is_none() {
        return Err(ValidationError::new("in").with_message("알 수 없는 역할입니다".into()));
    }
    Ok(())
}

fn validate_sex(value: &str) -> Result<(), ValidationError> {
    if Sex::from_code(value).is_none() {
        return Err(ValidationError::new("in").with_message("성별은 M 또는 F여야 합니다".into()));
    }
    Ok(())
}
