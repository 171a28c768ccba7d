//! 실행 환경과 로깅 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 없으면 환경별 기본값을 사용합니다.

use std::env;

use log::{info, warn};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 운영 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경
    ///
    /// `ENVIRONMENT`, 없으면 `PROFILE`을 읽습니다. 둘 다 없으면 운영 환경으로 간주합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 `.env` 파일 이름
    pub fn env_file(&self) -> &'static str {
        match self {
            Environment::Development => ".env.dev",
            Environment::Test => ".env.test",
            Environment::Staging => ".env.staging",
            Environment::Production => ".env.prod",
        }
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// `env_logger` 필터 문자열
    ///
    /// `RUST_LOG`가 있으면 그대로 쓰고, 없으면 환경별 기본값을 사용합니다.
    pub fn filter() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| Self::default_filter_for_env(&Environment::current()).to_string())
    }

    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 현재 환경의 `.env` 파일을 로드합니다.
///
/// 환경별 파일이 없으면 기본 `.env`를 시도합니다. 어느 파일도 없으면 프로세스 환경 변수만 사용합니다.
pub fn load_env_file() -> Option<&'static str> {
    let environment = Environment::current();
    let file = environment.env_file();

    match dotenv::from_filename(file) {
        Ok(_) => {
            info!("{} 파일 로드 됨 ({:?})", file, environment);
            Some(file)
        }
        Err(e) => {
            warn!("{} 파일 로드 실패: {}", file, e);
            dotenv::dotenv().ok().map(|_| ".env")
        }
    }
}
