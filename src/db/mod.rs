//! Database Connection Management Module
//!
//! 관계형 저장소(SQLite) 연결 관리를 담당하는 모듈입니다.
//! 커넥션 풀 생성과 스키마 마이그레이션 적용을 제공합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # SQLite 연결 URL
//! export DATABASE_URL="sqlite://portfolio.db?mode=rwc"
//!
//! # 커넥션 풀 크기
//! export DATABASE_MAX_CONNECTIONS="5"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::Database;
//! use crate::repositories::users::user_repo::SqlUserRepository;
//!
//! let database = Database::new().await?;
//! let user_repo = Arc::new(SqlUserRepository::new(database.pool().clone()));
//! ```

use std::str::FromStr;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// SQLite 커넥션 풀 래퍼
///
/// 리포지토리 계층에서 사용할 커넥션 풀을 보관합니다.
/// 생성 시점에 `migrations/` 디렉터리의 스키마를 적용합니다.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 환경 변수 설정으로 데이터베이스에 연결합니다.
    ///
    /// ## 환경 변수
    /// - `DATABASE_URL`: 연결 URL (기본값: "sqlite://portfolio.db?mode=rwc")
    /// - `DATABASE_MAX_CONNECTIONS`: 풀 크기 (기본값: 5)
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections()).await
    }

    /// 지정한 URL로 연결하고 마이그레이션을 적용합니다.
    pub async fn connect(url: &str, max_connections: u32) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("잘못된 DATABASE_URL: {}", url))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.migrate().await?;

        info!("✅ 데이터베이스 연결 성공: {}", url);

        Ok(database)
    }

    /// 프로세스 메모리에만 존재하는 데이터베이스를 생성합니다.
    ///
    /// 메모리 DB는 커넥션마다 별개이므로 풀을 단일 커넥션으로 고정하고
    /// 유휴 만료를 끕니다.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.migrate().await?;

        Ok(database)
    }

    /// 스키마 마이그레이션 적용
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// 리포지토리에서 사용할 커넥션 풀
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_in_memory_database_has_schema() {
        let database = Database::in_memory().await.expect("in-memory database");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name != 'sqlite_sequence' ORDER BY name",
        )
        .fetch_all(database.pool())
        .await
        .expect("list tables");

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "projects",
                "user_certifications",
                "user_education",
                "user_professional_skills",
                "user_technical_skills",
                "user_work_experience",
                "users",
            ]
        );
    }

    #[actix_web::test]
    async fn test_connect_rejects_malformed_url() {
        let result = Database::connect("sqlite://portfolio.db?mode=bogus", 1).await;

        assert!(matches!(result, Err(crate::core::errors::AppError::InternalError(_))));
    }
}
