//! 사용자 프로필 서비스 모듈
//!
//! 프로필 제출 변환과 사용자 집합 저장/조회 로직을 제공합니다.
//!
//! # Features
//!
//! - 제출 데이터 → `User` 집합 변환 ([`submission_mapper`])
//! - 집합 저장 및 ID/이메일 조회 ([`user_service`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let created = user_service.create_user(request).await?;
//! ```

pub mod submission_mapper;
pub mod user_service;

pub use user_service::UserService;
