//! # 사용자 프로필 서비스 구현
//!
//! 프로필 제출을 사용자 집합으로 변환해 저장하고, 저장된 집합을 조회하는
//! 비즈니스 로직을 담당합니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • create_user    (제출 → 집합 → 저장)        │
//! │  • get_user_by_id (없으면 NotFound)           │
//! │  • get_user_by_email                         │
//! └──────────────────────┬───────────────────────┘
//!                        │ Arc<dyn UserRepository>
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │          UserRepository (SQLite)             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 리포지토리는 생성자로 주입되므로 테스트에서는 임의의 구현으로 교체할 수 있습니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{dto::users::request::CreateUserRequest, entities::users::User},
    repositories::users::UserRepository,
};
use super::submission_mapper::to_user;

/// 사용자 프로필 비즈니스 로직 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::SqlUserRepository;
/// use crate::services::users::UserService;
///
/// let user_service = UserService::new(Arc::new(SqlUserRepository::new(pool)));
///
/// let created = user_service.create_user(request).await?;
/// let loaded = user_service.get_user_by_id(created.id.unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 프로필 제출로 새 사용자 생성
    ///
    /// 제출 데이터를 검증 없이 집합으로 변환한 뒤 저장하고, ID가 부여된 집합을
    /// 반환합니다. 저장소 오류는 그대로 전파됩니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let user = to_user(request);
        let created_user = self.user_repo.save(user).await?;

        log::info!(
            "사용자 생성 완료: id={:?} ({:?})",
            created_user.id,
            start_time.elapsed()
        );

        Ok(created_user)
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 존재하지 않음
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn get_user_by_id(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 이메일로 사용자 조회
    ///
    /// 이메일은 유니크하지 않으며, 여러 명이 일치하면 그중 한 명을 반환합니다.
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use crate::db::Database;
    use crate::repositories::users::SqlUserRepository;

    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn save(&self, _user: User) -> AppResult<User> {
            Err(AppError::DatabaseError("disk I/O error".to_string()))
        }

        async fn find_by_id(&self, _id: i64) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("disk I/O error".to_string()))
        }

        async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("disk I/O error".to_string()))
        }
    }

    async fn service() -> (Database, UserService) {
        let database = Database::in_memory().await.expect("in-memory database");
        let repo = SqlUserRepository::new(database.pool().clone());
        (database, UserService::new(Arc::new(repo)))
    }

    fn request(value: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[actix_web::test]
    async fn test_create_user_assigns_ids() {
        let (_db, service) = service().await;

        let created = service
            .create_user(request(json!({
                "name": "Ada",
                "email": "ada@x.com",
                "projects": [{ "title": "Engine", "description": "Analytical engine", "link": "http://x" }]
            })))
            .await
            .unwrap();

        let user_id = created.id.expect("user id");
        assert!(created.projects[0].id.is_some());
        assert_eq!(created.projects[0].owner_id(), Some(user_id));
        assert!(created.education.is_empty());
        assert_eq!(created.technical_skills, None);
    }

    #[actix_web::test]
    async fn test_get_user_by_id_round_trip() {
        let (_db, service) = service().await;

        let created = service
            .create_user(request(json!({
                "name": "Ada",
                "technicalSkills": [{ "name": "C++", "level": 90 }]
            })))
            .await
            .unwrap();

        let loaded = service.get_user_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Ada"));
        assert_eq!(loaded.technical_skills, created.technical_skills);
    }

    #[actix_web::test]
    async fn test_get_user_by_id_missing_is_not_found() {
        let (_db, service) = service().await;

        let result = service.get_user_by_id(999_999).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_user_by_email() {
        let (_db, service) = service().await;

        service
            .create_user(request(json!({ "name": "Ada", "email": "ada@x.com" })))
            .await
            .unwrap();

        let found = service.get_user_by_email("ada@x.com").await.unwrap();
        assert_eq!(found.name.as_deref(), Some("Ada"));

        let missing = service.get_user_by_email("nobody@x.com").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_repository_errors_propagate() {
        let service = UserService::new(Arc::new(FailingRepository));

        let created = service.create_user(request(json!({ "name": "Ada" }))).await;
        assert!(matches!(created, Err(AppError::DatabaseError(_))));

        let loaded = service.get_user_by_id(1).await;
        assert!(matches!(loaded, Err(AppError::DatabaseError(_))));
    }
}
