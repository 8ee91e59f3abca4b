//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 관계형 저장소(SQLite)에 대한 영속화를 `sqlx`로 수행합니다.
//! 리포지토리는 trait으로 노출되며, 서비스에 생성자 주입으로 전달됩니다.
//!
//! # Features
//!
//! - 사용자 집합 단위 트랜잭션 저장
//! - 소유 컬렉션 전체 교체 (부분 병합 없음)
//! - ID / 이메일 기반 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{SqlUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(SqlUserRepository::new(pool));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
