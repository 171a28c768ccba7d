//! 도메인 엔티티별 구체 트랜스포머

pub mod token;
pub mod user;

pub use token::TokenAutobot;
pub use user::UserAutobot;
