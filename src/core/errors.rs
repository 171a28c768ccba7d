//! # Application Error Handling System
//!
//! 트랜스포머 엔진과 그 주변 계층(검증, 리포지토리)을 위한 통합 에러 처리 시스템입니다.
//! 에러는 두 개의 채널로 분리됩니다.
//!
//! ## 에러 채널
//!
//! ### 1. 트랜스포머 에러 ([`TransformError`])
//! - **ContractViolation**: 선언된 모델 계약을 만족하지 않는 입력 (타입 소거 경로에서만 발생)
//! - **CastError**: DIRECT 속성 값을 선언된 타입 태그로 변환할 수 없음
//! - **ConfigurationError**: 존재하지 않는 getter 참조, 속성 이름 중복, 응답 타입과 속성 집합 불일치
//! - **ConstructionError**: Response Factory가 입력을 거부함
//!
//! 트랜스포머 에러는 데이터 무결성 또는 프로그래밍 오류를 의미하므로 재시도하지 않으며,
//! 중첩 트랜스포머의 실패는 바깥 `transform` 호출까지 그대로 전파됩니다.
//! 부분적으로 채워진 응답은 절대 반환되지 않습니다.
//!
//! ### 2. 검증 에러 ([`FieldErrors`])
//! - 요청 단위로 필드별 에러 코드를 모은 별도 채널
//! - 트랜스포머 에러와 섞이지 않음
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `TransformError` | 500 Internal Server Error | 모델 → 응답 변환 실패 |
//! | `RepositoryError` | 500 Internal Server Error | 유일성 검사 중 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::transformer::caster::TypeTag;

/// 트랜스포머 엔진 에러
///
/// `transform` 호출과 트랜스포머 등록 과정에서 발생하는 모든 실패를 표현합니다.
/// 각 변형은 문제를 일으킨 트랜스포머/속성/응답 타입을 구조화된 필드로 보존합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// 입력 모델이 트랜스포머가 선언한 계약을 만족하지 않음
    ///
    /// 타입이 지정된 `transform` 호출에서는 컴파일 타임에 보장되므로,
    /// 타입 소거된 `transform_any` / 레지스트리 `transform_value` 경로에서만 발생합니다.
    #[error("Contract violation: transformer `{transformer}` expects `{expected}`")]
    ContractViolation {
        transformer: &'static str,
        expected: &'static str,
    },

    /// DIRECT 속성의 원시 값을 타입 태그로 변환할 수 없음
    ///
    /// 원본 모델의 데이터 무결성 버그를 의미합니다. 기본값으로 대체하지 않습니다.
    #[error("Cast error on `{attribute}`: cannot cast {found} `{value}` to {tag}")]
    CastError {
        attribute: String,
        tag: TypeTag,
        found: &'static str,
        value: String,
    },

    /// 트랜스포머 구성 오류 (등록 시점에 검출)
    #[error("Configuration error in `{transformer}`: {message}")]
    ConfigurationError {
        transformer: &'static str,
        message: String,
    },

    /// Response Factory 구성 실패
    #[error("Construction error for `{response}`: {message}")]
    ConstructionError {
        response: &'static str,
        message: String,
    },
}

impl TransformError {
    pub fn configuration(transformer: &'static str, message: impl Into<String>) -> Self {
        TransformError::ConfigurationError {
            transformer,
            message: message.into(),
        }
    }

    pub fn construction(response: &'static str, message: impl Into<String>) -> Self {
        TransformError::ConstructionError {
            response,
            message: message.into(),
        }
    }
}

/// 트랜스포머 엔진 전용 Result 별칭
pub type TransformResult<T> = Result<T, TransformError>;

/// 필드별 검증 에러 모음
///
/// 요청 하나에 대한 모든 검증 실패를 필드 이름 → 에러 코드 목록으로 보관합니다.
/// 필드는 이름순으로, 코드는 발생 순서대로 유지됩니다.
///
/// ```json
/// {
///   "email": ["email", "unique"],
///   "role": ["in"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드에 에러 코드를 추가합니다.
    pub fn add(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(code.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut collected = FieldErrors::new();
        for (field, failures) in errors.field_errors() {
            for failure in failures.iter() {
                collected.add(field.to_string(), failure.code.to_string());
            }
        }
        collected
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, codes) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, codes.join(", "))?;
        }
        Ok(())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 트랜스포머 에러와 검증 에러를 HTTP 계층까지 운반하는 최상위 에러입니다.
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // 트랜스포머 에러는 `?`로 자동 변환
/// let response = registry.get::<TokenAutobot>()?.transform(&token)?;
///
/// // 저장소 에러 변환
/// repository.exists_by_email(email, None)
///     .map_err(|e| AppError::RepositoryError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 모델 → 응답 변환 실패 (500 Internal Server Error)
    #[error("Transform error: {0}")]
    TransformError(#[from] TransformError),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 필드별로 모든 실패를 모아서 한 번에 보고합니다.
    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    /// 유일성 검사 등 저장소 조회 실패 (500 Internal Server Error)
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드별 상세를 `fields`에 담고, 나머지는 메시지만 노출합니다.
    ///
    /// ```json
    /// {
    ///   "error": "Validation error: email: unique",
    ///   "fields": { "email": ["unique"] }
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(fields) => serde_json::json!({
                "error": self.to_string(),
                "fields": fields,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let rendered = serde_json::to_string_pretty(&value)
///     .context("Failed to render response")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let mut fields = FieldErrors::new();
        fields.add("email", "unique");
        let error = AppError::ValidationError(fields);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transform_error_response() {
        let error: AppError = TransformError::configuration("token", "missing getter").into();
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_errors_display_and_order() {
        let mut fields = FieldErrors::new();
        fields.add("role", "in");
        fields.add("email", "email");
        fields.add("email", "unique");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("email"), Some(&["email".to_string(), "unique".to_string()][..]));
        assert_eq!(fields.to_string(), "email: email, unique; role: in");
    }

    #[test]
    fn test_cast_error_message() {
        let error = TransformError::CastError {
            attribute: "expired_at".to_string(),
            tag: TypeTag::DateTime,
            found: "int",
            value: "42".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Cast error on `expired_at`: cannot cast int `42` to DATETIME"
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
