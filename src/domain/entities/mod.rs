//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 관계형 테이블과 매핑되며 (`sqlx::FromRow`), 그대로 JSON 응답 본문으로 직렬화됩니다.

pub mod users;
