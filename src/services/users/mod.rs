//! 사용자 관련 비즈니스 규칙
//!
//! ```rust,ignore
//! use crate::services::users::UpdateUserRule;
//!
//! let rule = UpdateUserRule::new(users.clone());
//! rule.validate(&request, &user_id)?;
//! ```

pub mod update_user_rule;

pub use update_user_rule::UpdateUserRule;
