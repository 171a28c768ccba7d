//! 도메인 엔티티
//!
//! 각 엔티티는 [`models::contracts`](crate::domain::models::contracts)의 계약을 구현합니다.

pub mod tokens;
pub mod users;
