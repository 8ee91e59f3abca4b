//! Users Entity Module
//!
//! 사용자 프로필 도메인의 엔티티와 값 객체를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`user::User`] - 집합 루트, 스칼라 프로필 필드와 소유 컬렉션
//! - [`project::Project`] - 사용자에게 속한 자식 엔티티 (자체 ID 보유)
//! - [`values`] - `Skill`, `Education`, `WorkExperience`, `Certification` 값 객체
//!
//! # 관계
//!
//! ```text
//! User 1 ──< Project          (user_id 외래 키, 직렬화 시 역참조 제외)
//! User 1 ──< Skill            (technical / professional)
//! User 1 ──< Education
//! User 1 ──< WorkExperience
//! User 1 ──< Certification
//! ```

pub mod user;
pub mod project;
pub mod values;

pub use project::Project;
pub use user::User;
pub use values::{Certification, Education, Skill, WorkExperience};
