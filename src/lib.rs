//! 배송 백엔드 응답 트랜스포머
//!
//! 도메인 모델(사용자, 인증 토큰)을 불변 응답 DTO로 변환하는 선언적 매핑 엔진과
//! 이를 둘러싼 레지스트리, 검증 규칙, 설정을 제공합니다.

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod transformer;
