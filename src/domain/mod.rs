//! # Domain Layer
//!
//! ```text
//! domain
//! ├── entities   User, Token (메모리 엔티티)
//! ├── models     모델 계약(trait), 역할/성별 코드
//! └── dto        응답 DTO, 요청 DTO
//! ```
//!
//! 트랜스포머는 `models`의 계약에만 의존하고, 엔티티는 그 계약을 구현합니다.

pub mod dto;
pub mod entities;
pub mod models;
