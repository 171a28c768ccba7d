//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 리포지토리 trait 객체를 주입받습니다.

pub mod users;
