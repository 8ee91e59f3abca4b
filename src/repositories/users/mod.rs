//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) trait과 SQLite 구현체
//! [`SqlUserRepository`](user_repo::SqlUserRepository)를 제공합니다.

pub mod user_repo;

pub use user_repo::{SqlUserRepository, UserRepository};
