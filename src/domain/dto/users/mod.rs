//! # 사용자 DTO 모듈
//!
//! 사용자 프로필 API의 요청 DTO를 모아둔 모듈입니다.
//! 응답은 `User` 엔티티를 그대로 직렬화하므로 별도 응답 DTO가 없습니다.

pub mod request;

pub use request::*;
