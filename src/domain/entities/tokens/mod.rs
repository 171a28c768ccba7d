//! Tokens Entity Module
//!
//! 인증 토큰 엔티티를 정의하는 모듈입니다. 토큰은 소유 사용자를 `Arc`로 함께 보관합니다.

pub mod token;

pub use token::Token;
