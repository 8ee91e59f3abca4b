//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//! 엔티티로의 변환은 `services::users::submission_mapper`가 담당합니다.

pub mod create_user;

pub use create_user::{
    CertificationRequest, CreateUserRequest, EducationRequest, ProjectRequest, SkillRequest,
    WorkExperienceRequest,
};
