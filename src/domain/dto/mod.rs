//! 데이터 전송 객체 (DTO)
//!
//! 응답 DTO는 트랜스포머가 만드는 불변 스냅샷이고, 요청 DTO는 `validator`로 형식을 검증합니다.

pub mod tokens;
pub mod users;
