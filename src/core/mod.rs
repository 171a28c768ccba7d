//! # Core Module
//!
//! 트랜스포머 엔진을 둘러싼 공통 기반 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 트랜스포머 컨테이너
//! - **TransformerRegistry**: 트랜스포머 싱글톤 보관 및 조립 지점
//! - **생성자 주입**: 협력 트랜스포머는 생성 시점에 `Arc`로 전달
//! - **부팅 시 검증**: 등록마다 디스크립터 구성 검사 실행
//!
//! ### [`errors`] - 통합 에러 처리
//! - **TransformError**: 트랜스포머 엔진 에러 (계약 위반, 캐스팅, 구성, 응답 생성)
//! - **AppError**: 애플리케이션 전역 에러, Actix-Web `ResponseError` 구현
//! - **FieldErrors**: 필드별 검증 에러 모음
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::{TransformerRegistry, TOKEN_TRANSFORMER};
//! use crate::transformer::autobots::TokenAutobot;
//!
//! let registry = TransformerRegistry::boot()?;
//!
//! // 타입으로 조회
//! let tokens = registry.get::<TokenAutobot>()?;
//! let response = tokens.transform(&token)?;
//!
//! // 별칭으로 조회 (타입 소거)
//! let value = registry.transform_value(TOKEN_TRANSFORMER, &model)?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
