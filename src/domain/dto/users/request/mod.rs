//! 사용자 요청 DTO
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::UpdateUserRequest;
//!
//! let request: UpdateUserRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! ```

pub mod update_user_request;

pub use update_user_request::UpdateUserRequest;
