//! # Transformer Engine
//!
//! 도메인 모델을 불변 응답 DTO로 바꾸는 선언적 매핑 엔진입니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`caster`] | 원시 값 → 와이어 값 타입 변환 |
//! | [`attribute`] | 출력 필드 디스크립터와 모델 접근자 표 |
//! | [`autobot`] | 디스크립터 해석과 변환 오케스트레이션 |
//! | [`response`] | 응답 DTO 생성 계약 |
//! | [`autobots`] | 엔티티별 구체 트랜스포머 |
//!
//! 새 엔티티는 모델 계약에 [`Transformable`]을, 응답 DTO에 [`ResponseFactory`]를 구현한 뒤
//! [`Autobot`]으로 기본 디스크립터만 선언하면 됩니다.

pub mod attribute;
pub mod autobot;
pub mod autobots;
pub mod caster;
pub mod response;

pub use attribute::{Attribute, AttributeKind, Transformable, COMMON_ATTRIBUTES};
pub use autobot::{Autobot, ErasedTransformer, Transformer};
pub use caster::{RawValue, TypeTag};
pub use response::{AttributeMap, ResponseFactory};
