//! 사용자 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::UpdateUserRequest;
pub use response::UserResponse;
