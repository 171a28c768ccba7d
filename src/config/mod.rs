//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 관리합니다.
//!
//! - [`data_config`] - 실행 환경, 로깅 필터, `.env` 파일 로드
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export PROFILE="dev"               # ENVIRONMENT가 없을 때 사용
//! export RUST_LOG="courier_transformer=debug"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{load_env_file, Environment, LogConfig};
//!
//! load_env_file();
//! let env = Environment::current();
//! let filter = LogConfig::filter();
//! ```

pub mod data_config;

pub use data_config::*;
