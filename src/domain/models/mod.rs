//! 모델 계약과 도메인 코드 값

pub mod contracts;
pub mod role;

pub use contracts::{Model, TokenModel, UserModel};
pub use role::{Role, Sex};
