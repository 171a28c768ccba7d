//! 사용자 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let users = InMemoryUserRepository::new();
//! let taken = users.exists_by_email("user@example.com", None)?;
//! ```

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserRepository};
