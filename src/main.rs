//! 배송 백엔드 응답 트랜스포머 데모 애플리케이션
//!
//! 트랜스포머 레지스트리를 부팅하고 샘플 토큰을 응답 JSON으로 변환해 출력합니다.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use env_logger::Env;
use log::info;

use courier_transformer::config::{load_env_file, LogConfig};
use courier_transformer::core::errors::{AppError, AppResult, ErrorContext};
use courier_transformer::core::registry::TransformerRegistry;
use courier_transformer::domain::dto::users::request::UpdateUserRequest;
use courier_transformer::domain::entities::tokens::Token;
use courier_transformer::domain::entities::users::User;
use courier_transformer::domain::models::role::Role;
use courier_transformer::repositories::users::InMemoryUserRepository;
use courier_transformer::services::users::UpdateUserRule;
use courier_transformer::transformer::autobots::TokenAutobot;

fn main() -> AppResult<()> {
    load_env_file();
    init_logging();

    info!("🚀 응답 트랜스포머 시작중...");

    let registry = TransformerRegistry::boot()?;
    let tokens = registry.get::<TokenAutobot>()?;

    let users = Arc::new(InMemoryUserRepository::new());
    let token = sample_token(&users)?;
    let response = tokens.transform(&token)?;

    let rule = UpdateUserRule::new(users);
    let update = UpdateUserRequest {
        name: token.user.name.clone(),
        email: token.user.email.clone(),
        phone: token.user.phone.clone(),
        address: "Busan".to_string(),
        role: token.user.role.code().to_string(),
        sex: None,
    };
    rule.validate(&update, &token.user.id)?;

    let json = serde_json::to_string_pretty(&response).context("응답 직렬화 실패")?;
    println!("{}", json);

    info!("✅ 토큰 {} 변환 완료", response.id);
    Ok(())
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 레벨을 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or(LogConfig::filter()));
}

/// 데모용 토큰 (`t1` / `abc123`, 소유자 `u1` Alice)
///
/// 소유자는 저장소에도 저장되어 수정 검증의 이메일 중복 검사 대상이 됩니다.
fn sample_token(users: &InMemoryUserRepository) -> AppResult<Token> {
    let at = |year, month, day| {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::InternalError(format!("잘못된 날짜: {}-{}-{}", year, month, day)))
    };

    let mut user = User::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "01012345678".to_string(),
        "Seoul".to_string(),
        Role::Courier,
    );
    user.id = "u1".to_string();

    Ok(Token {
        id: "t1".to_string(),
        token: "abc123".to_string(),
        expired_at: at(2024, 1, 1)?,
        user: users.save(user)?,
        created_at: at(2023, 1, 1)?,
        updated_at: at(2023, 6, 1)?,
    })
}
