//! # Domain Layer Module
//!
//! 포트폴리오 프로필 도메인을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티와 값 객체 (User, Project, Skill, ...)
//! └── dto       - 요청 전송 객체 (CreateUserRequest, ...)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```

pub mod entities;
pub mod dto;
