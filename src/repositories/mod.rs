//! 데이터 액세스 계층
//!
//! 서비스 계층은 구체 저장소가 아니라 이 모듈의 trait에 의존합니다.

pub mod users;
