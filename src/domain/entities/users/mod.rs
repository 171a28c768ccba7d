//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//! [`User`](user::User)는 [`UserModel`](crate::domain::models::contracts::UserModel) 계약을 구현합니다.

pub mod user;

pub use user::User;
